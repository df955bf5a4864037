//! Post-solve reporting.

use optiplan_model::{Model, Status};

/// Print the human-readable report: problem name, status, each variable's
/// resolved value, and the objective value.
pub fn print_text(model: &Model) {
    println!();
    println!("Problem: {}", model.name());
    match model.status() {
        Some(status) => println!("Status: {}", status),
        None => println!("Status: Not Solved"),
    }

    let Some(solution) = model.solution() else {
        return;
    };
    for (name, value) in &solution.values {
        println!("  {} = {}", name, value);
    }
    if let Some(objective) = solution.objective_value {
        println!("Objective value: {}", objective);
    }
    if solution.status != Status::Optimal {
        match solution.status {
            Status::Infeasible => println!("No solution satisfies all constraints."),
            Status::Unbounded => println!("The problem has no finite optimal solution."),
            _ => println!("The solver could not classify the problem."),
        }
    }
}

/// Print the solution as JSON.
pub fn print_json(model: &Model) {
    let Some(solution) = model.solution() else {
        return;
    };
    println!(
        "{}",
        serde_json::to_string_pretty(solution)
            .unwrap_or_else(|e| format!("{{\"error\": \"{}\"}}", e))
    );
}
