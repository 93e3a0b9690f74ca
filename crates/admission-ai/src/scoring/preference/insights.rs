use super::views::{PreferenceSummary, RiskTolerance};

pub(crate) const EMPTY_SELECTION_MESSAGE: &str =
    "Please select some programs to generate a preference list.";

const MIN_PROGRAMS: usize = 5;
const MAX_PROGRAMS: usize = 15;
const SAFE_SHARE_TOLERANCE: f64 = 10.0;
const LOW_AVERAGE_CHANCE: f64 = 40.0;

pub(crate) fn generate_recommendations(
    summary: &PreferenceSummary,
    tolerance: RiskTolerance,
) -> Vec<String> {
    let mut recommendations = Vec::new();

    if summary.safe_count == 0 {
        recommendations.push(
            "Warning: none of your selected programs is a safe choice. Add at least two programs \
             where your admission chance is 70% or higher."
                .to_string(),
        );
    }

    if summary.total_programs < MIN_PROGRAMS {
        recommendations.push(format!(
            "You have selected only {} program{}; consider adding more to broaden your options.",
            summary.total_programs,
            if summary.total_programs == 1 { "" } else { "s" }
        ));
    }

    if summary.total_programs > MAX_PROGRAMS {
        recommendations.push(format!(
            "Your list has {} programs; consider narrowing it to the {MAX_PROGRAMS} you would \
             genuinely accept.",
            summary.total_programs
        ));
    }

    let safe_share = summary.safe_share();
    let target = tolerance.target_safe_share();
    if (safe_share - target).abs() > SAFE_SHARE_TOLERANCE {
        let direction = if safe_share < target {
            "adding safer programs"
        } else {
            "swapping some safe programs for more ambitious ones"
        };
        recommendations.push(format!(
            "{safe_share:.0}% of your list is safe while a {} strategy aims for about \
             {target:.0}%; consider rebalancing by {direction}.",
            tolerance.label()
        ));
    }

    if summary.ambitious_count * 2 > summary.total_programs {
        recommendations.push(
            "More than half of your choices are ambitious; make sure the programs you list first \
             are ones you can realistically secure."
                .to_string(),
        );
    }

    if summary.average_chance < LOW_AVERAGE_CHANCE {
        recommendations.push(format!(
            "Your average admission chance is {:.0}%; improving your NET score would lift every \
             option on this list.",
            summary.average_chance
        ));
    }

    if recommendations.is_empty() {
        recommendations.push(
            "Your preference list is well balanced across safe, moderate, and ambitious choices."
                .to_string(),
        );
    }

    recommendations
}
