use crate::infra::read_json_file;
use chrono::{Local, NaiveDate};
use clap::Args;
use mission_match::error::AppError;
use mission_match::matching::router::ScoreRequest;
use mission_match::matching::{
    qualified_only, rank_candidates, CandidateProfile, CompatibilityEngine, ConfigurationError,
    Coordinates, EstablishmentScoringConfig, MissionId, MissionRequirement, Mobility, NurseId,
    ShiftType, SpecializedExperience, Urgency,
};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// JSON file holding `candidate`, `mission`, and an optional `config`
    #[arg(long)]
    pub(crate) input: PathBuf,
}

#[derive(Args, Debug)]
pub(crate) struct ValidateArgs {
    /// JSON file holding an establishment scoring configuration
    #[arg(long)]
    pub(crate) config: PathBuf,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Mission start date (YYYY-MM-DD). Defaults to today.
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) start_date: Option<NaiveDate>,
    /// Only list candidates at or above the qualification threshold.
    #[arg(long)]
    pub(crate) qualified_only: bool,
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let request: ScoreRequest = read_json_file(&args.input)?;
    let engine = CompatibilityEngine::new();

    let result = engine.score(&request.candidate, &request.mission, &request.config)?;
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

pub(crate) fn run_validate(args: ValidateArgs) -> Result<(), AppError> {
    let config: EstablishmentScoringConfig = read_json_file(&args.config)?;
    let report = CompatibilityEngine::new().validate_config(&config);

    if report.valid {
        println!("configuration is valid");
        Ok(())
    } else {
        for error in &report.errors {
            println!("- {error}");
        }
        Err(AppError::Scoring(ConfigurationError {
            errors: report.errors,
        }))
    }
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        start_date,
        qualified_only: keep_qualified,
    } = args;
    let start_date = start_date.unwrap_or_else(|| Local::now().date_naive());

    let mission = demo_mission(start_date);
    let policy = demo_policy();
    let engine = CompatibilityEngine::new();

    println!(
        "Mission {} ({}, {:?} shift, {:?}) starting {}",
        mission.id.0, mission.specialization, mission.shift, mission.urgency, mission.start_date
    );
    println!(
        "Establishment policy: criteria [{}], specific \"{}\" ({} pts)",
        policy.selected_criteria.join(", "),
        policy.specific_criterion.as_deref().unwrap_or("-"),
        policy.specific_criterion_weight
    );

    let ranked = rank_candidates(&engine, &demo_pool(), &mission, &policy)?;
    let ranked = if keep_qualified {
        qualified_only(ranked)
    } else {
        ranked
    };

    for entry in &ranked {
        let result = &entry.result;
        println!(
            "\n{} -> {} / 100 ({}) [base {} | modular {} | specific {}]",
            entry.nurse_id.0,
            result.total_score,
            if result.is_qualified {
                "qualified"
            } else {
                "not qualified"
            },
            result.breakdown.base,
            result.breakdown.modular,
            result.breakdown.specific
        );
        for factor in &result.factors {
            println!("  - {factor}");
        }
    }

    Ok(())
}

fn demo_mission(start_date: NaiveDate) -> MissionRequirement {
    MissionRequirement {
        id: MissionId("demo-urg-001".to_string()),
        specialization: "urgences".to_string(),
        required_experience_years: 3.0,
        location: Coordinates::new(45.7485, 4.8467),
        shift: ShiftType::Night,
        urgency: Urgency::Urgent,
        start_date,
    }
}

fn demo_policy() -> EstablishmentScoringConfig {
    EstablishmentScoringConfig {
        custom_scoring_enabled: true,
        selected_criteria: vec![
            "night_experience".to_string(),
            "advanced_certifications".to_string(),
            "enhanced_mobility".to_string(),
        ],
        specific_criterion: Some("Expérience COVID en service aigu".to_string()),
        specific_criterion_weight: 10,
    }
}

fn demo_pool() -> Vec<CandidateProfile> {
    let nurse = |id: &str, specs: &[&str], years: f64, location: Coordinates| CandidateProfile {
        id: NurseId(id.to_string()),
        specializations: specs.iter().map(|spec| spec.to_string()).collect(),
        experience_years: years,
        rating: 4.3,
        certifications: Vec::new(),
        languages: vec!["français".to_string()],
        mobility: Mobility::PublicTransport,
        night_shift_experience: false,
        specialized_experience: SpecializedExperience::default(),
        location,
        missions_with_establishment: 0,
    };

    let mut amina = nurse("amina", &["urgences"], 7.0, Coordinates::new(45.7600, 4.8350));
    amina.night_shift_experience = true;
    amina.certifications.push("AFGSU_2".to_string());
    amina.specialized_experience.infectious_disease = true;

    let mut lucas = nurse("lucas", &["cardiologie"], 4.0, Coordinates::new(45.8500, 4.9000));
    lucas.mobility = Mobility::Vehicle;
    lucas.night_shift_experience = true;

    let chloe = nurse("chloe", &["pneumologie"], 1.5, Coordinates::new(46.0500, 4.7000));
    let yanis = nurse("yanis", &["psychiatrie"], 10.0, Coordinates::new(45.1885, 5.7245));

    vec![amina, lucas, chloe, yanis]
}
