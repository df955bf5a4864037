//! The canned demo problems.

use optiplan_model::{ConstraintOp, Model, ModelError, Sense, Variable};

/// Production-mix problem.
///
/// A factory makes screws ($20/ton profit, up to 400 tons/day demand,
/// 60 tons/hour) and nails ($30/ton profit, up to 300 tons/day demand,
/// 50 tons/hour) in an 8-hour working day. How many tons of each should it
/// produce per day to maximise profit?
///
/// Expected optimum: 120 tons of screws and 300 tons of nails, $11400/day.
pub fn factory_products() -> Result<Model, ModelError> {
    let mut model = Model::new("Factory Products Profit");

    let screws = Variable::integer("screws_tons_per_day", Some(0.0), Some(400.0))?;
    let nails = Variable::integer("nails_tons_per_day", Some(0.0), Some(300.0))?;
    model.add_variable(screws.clone())?;
    model.add_variable(nails.clone())?;

    model.set_objective(20.0 * &screws + 30.0 * &nails, Sense::Maximize)?;
    model.add_constraint(
        "working_hours",
        (1.0 / 60.0) * &screws + (1.0 / 50.0) * &nails,
        ConstraintOp::Le,
        8.0,
    )?;

    Ok(model)
}

/// Advertising-budget problem.
///
/// A print ad costs $20,000 and reaches 1 million people; a TV ad costs
/// $50,000 and reaches 2 million. At most 40 print ads and 15 TV ads may run,
/// on a $1 million budget. Which campaign reaches the most people?
///
/// Expected optimum: 40 print ads and 4 TV ads, reaching 48 million people.
pub fn advertisement_campaign() -> Result<Model, ModelError> {
    let mut model = Model::new("Advertisement Campaign");

    let print_ads = Variable::integer("run_no_of_print_media", Some(0.0), Some(40.0))?;
    let tv_ads = Variable::integer("run_no_of_tv_media", Some(0.0), Some(15.0))?;
    model.add_variable(print_ads.clone())?;
    model.add_variable(tv_ads.clone())?;

    model.set_objective(
        1_000_000.0 * &print_ads + 2_000_000.0 * &tv_ads,
        Sense::Maximize,
    )?;
    model.add_constraint(
        "budget",
        20_000.0 * &print_ads + 50_000.0 * &tv_ads,
        ConstraintOp::Le,
        1_000_000.0,
    )?;

    Ok(model)
}
