use crate::infra::parse_score;
use admission_ai::catalog::ProgramCatalog;
use admission_ai::error::AppError;
use admission_ai::scoring::{
    calculate_aggregate, plan_net_score, predict_chance, predict_merit_list, validate_input,
    AggregateBreakdown, Curriculum, CurriculumContribution, PreferenceList,
    PreferenceListGenerator, PreferenceProfile, RiskTolerance, ScoreInput,
};
use clap::{ArgGroup, Args};

#[derive(Args, Debug)]
#[command(group(
    ArgGroup::new("curriculum")
        .required(true)
        .args(["hssc", "equivalence"])
))]
pub(crate) struct AggregateArgs {
    /// Entrance test (NET) score out of 200
    #[arg(long, value_parser = parse_score)]
    pub(crate) net: f64,
    /// Higher secondary (HSSC) percentage
    #[arg(long, value_parser = parse_score, requires = "ssc")]
    pub(crate) hssc: Option<f64>,
    /// Secondary (SSC) percentage
    #[arg(long, value_parser = parse_score, requires = "hssc")]
    pub(crate) ssc: Option<f64>,
    /// Equivalence certificate percentage for foreign qualifications
    #[arg(long, value_parser = parse_score)]
    pub(crate) equivalence: Option<f64>,
}

impl AggregateArgs {
    fn score_input(&self) -> ScoreInput {
        let curriculum = match (self.hssc, self.ssc) {
            (Some(hssc), Some(ssc)) => Curriculum::local(hssc, ssc),
            _ => Curriculum::Equivalence {
                percentage: self.equivalence,
            },
        };

        ScoreInput {
            net_score: self.net,
            curriculum,
        }
    }
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Aggregate to plan with. Defaults to a sample student (NET 150, HSSC 85%, SSC 90%).
    #[arg(long, value_parser = parse_score)]
    pub(crate) aggregate: Option<f64>,
}

pub(crate) fn run_aggregate(args: AggregateArgs) -> Result<(), AppError> {
    let input = args.score_input();
    let validation = validate_input(&input);

    if !validation.is_valid {
        println!("Input rejected");
        for error in &validation.errors {
            println!("- {}", error);
        }
        return Ok(());
    }

    render_breakdown(&calculate_aggregate(&input));
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let student = ScoreInput {
        net_score: 150.0,
        curriculum: Curriculum::local(85.0, 90.0),
    };
    let aggregate = match args.aggregate {
        Some(aggregate) => aggregate,
        None => {
            let breakdown = calculate_aggregate(&student);
            render_breakdown(&breakdown);
            breakdown.total_aggregate
        }
    };

    let catalog = ProgramCatalog::sample();
    println!("\nAdmission outlook at {:.2}%", aggregate);
    for program in catalog.programs() {
        let candidate = catalog.candidate(&program.id)?;
        let chance = predict_chance(aggregate, candidate.reference_closing());
        let merit = predict_merit_list(aggregate, &candidate.thresholds);
        let round = match merit.predicted_round {
            Some(round) => format!("merit list {} ({})", round, merit.confidence.label()),
            None => "no merit list".to_string(),
        };
        println!(
            "- {} [{}]: {}% {} | {}",
            program.name, program.campus, chance.chance_percentage, chance.category_label, round
        );
    }

    let Some((target, closing)) = catalog
        .programs()
        .first()
        .and_then(|program| catalog.candidate(&program.id).ok())
        .and_then(|candidate| {
            candidate
                .reference_closing()
                .map(|closing| (candidate.program.name, closing))
        })
    else {
        return Ok(());
    };

    let plan = plan_net_score(closing, &student.curriculum);
    println!(
        "\nNET plan for {} (closing {:.2}%): {} | minimum {} | recommended {} | safe {}",
        target,
        closing,
        plan.achievability_label,
        plan.minimum.required_net_score,
        plan.recommended.required_net_score,
        plan.high_confidence.required_net_score
    );
    for scenario in &plan.scenarios {
        println!(
            "  - NET {} -> {:.2}% ({:+.2}) {}",
            scenario.net_score, scenario.aggregate, scenario.difference, scenario.chance_label
        );
    }

    let ids: Vec<&str> = catalog
        .programs()
        .iter()
        .map(|program| program.id.as_str())
        .collect();
    let candidates = catalog.candidates(ids)?;
    let profile = PreferenceProfile {
        interests: [("Computing".to_string(), 5), ("Electrical".to_string(), 4)]
            .into_iter()
            .collect(),
        preferred_campuses: vec!["Main Campus".to_string()],
        risk_tolerance: RiskTolerance::Balanced,
    };
    let list = PreferenceListGenerator::new().generate(aggregate, &candidates, &profile);
    render_preferences(&list);

    Ok(())
}

fn render_breakdown(breakdown: &AggregateBreakdown) {
    println!("Aggregate breakdown");
    println!(
        "- NET {:.0}/200 ({:.2}%) -> {:.2}",
        breakdown.net_score, breakdown.net_percentage, breakdown.net_contribution
    );
    match breakdown.curriculum {
        CurriculumContribution::Local {
            hssc_percentage,
            hssc_contribution,
            ssc_percentage,
            ssc_contribution,
        } => {
            println!("- HSSC {:.2}% -> {:.2}", hssc_percentage, hssc_contribution);
            println!("- SSC {:.2}% -> {:.2}", ssc_percentage, ssc_contribution);
        }
        CurriculumContribution::Equivalence {
            equivalence_percentage,
            equivalence_contribution,
        } => {
            println!(
                "- Equivalence {:.2}% -> {:.2}",
                equivalence_percentage, equivalence_contribution
            );
        }
    }
    println!("Total aggregate: {:.2}%", breakdown.total_aggregate);
}

fn render_preferences(list: &PreferenceList) {
    let summary = &list.summary;
    println!(
        "\nPreference list: {} programs | {} safe / {} moderate / {} ambitious | avg chance {:.1}%",
        summary.total_programs,
        summary.safe_count,
        summary.moderate_count,
        summary.ambitious_count,
        summary.average_chance
    );
    for item in &list.ranked {
        println!(
            "{:>2}. {} [{}] score {:.2} - {}",
            item.rank,
            item.program.name,
            item.risk.label(),
            item.combined_score,
            item.reasoning
        );
    }

    println!("\nRecommendations");
    for note in &list.recommendations {
        println!("- {}", note);
    }
}
