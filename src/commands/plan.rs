use anyhow::Result;

use anvil::recipe;
use anvil::step::StepSummary;

pub fn execute(json: bool) -> Result<()> {
    let steps = recipe::steps();
    let summaries: Vec<StepSummary> = steps.iter().map(|step| step.summary()).collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&summaries)?);
        return Ok(());
    }

    println!("Scaffold recipe ({} steps):", summaries.len());
    for (index, summary) in summaries.iter().enumerate() {
        print_summary(summary, Some(index + 1), 0);
    }
    Ok(())
}

fn print_summary(summary: &StepSummary, number: Option<usize>, depth: usize) {
    let indent = "  ".repeat(depth);
    match number {
        Some(number) => println!("{indent}{number:3}. {:<18} {}", summary.kind, summary.detail),
        None => println!("{indent}   - {:<18} {}", summary.kind, summary.detail),
    }
    for nested in &summary.nested {
        print_summary(nested, None, depth + 1);
    }
}
