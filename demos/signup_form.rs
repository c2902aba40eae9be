//! Signup form demonstration.
//!
//! This example shows the request binding workflow:
//! 1. Declare typed fields with bounds and options
//! 2. Process a valid submission and read the bound values
//! 3. Process an invalid submission and inspect the errors
//! 4. Combine the outcomes of two forms on one page
//!
//! Run with: `cargo run --example signup_form`

use request_form::helper::add_options_for_year;
use request_form::web::QueryParams;
use request_form::{
    CombinedResult, ErrorKind, Field, NamedEnum, NumberField, Outcome, RequestForm, SelectField,
    TextField,
};

#[derive(Debug, Clone, Copy, PartialEq)]
enum Plan {
    Free,
    Team,
    Enterprise,
}

impl NamedEnum for Plan {
    const VARIANTS: &'static [Self] = &[Plan::Free, Plan::Team, Plan::Enterprise];

    fn name(self) -> &'static str {
        match self {
            Plan::Free => "FREE",
            Plan::Team => "TEAM",
            Plan::Enterprise => "ENTERPRISE",
        }
    }
}

struct SignupForm {
    form: RequestForm,
    username: TextField,
    age: NumberField<i32>,
    plan: Field<Plan>,
    birth_year: SelectField<i32>,
    newsletter: Field<bool>,
}

impl SignupForm {
    fn new() -> Self {
        let mut form = RequestForm::new();

        let username: TextField = TextField::new(&mut form, "username");
        username
            .set_required(true)
            .set_min_length(3)
            .set_max_length(16);

        let age: NumberField<i32> = NumberField::new(&mut form, "age");
        age.set_required(true).set_range(13, 120);

        let plan: Field<Plan> = Field::new(&mut form, "plan");
        plan.set_default_on_process(Plan::Free);

        let birth_year: SelectField<i32> = SelectField::new(&mut form, "birth_year");
        add_options_for_year(&birth_year, 100, 0, 2026);

        let newsletter: Field<bool> = Field::new(&mut form, "newsletter");
        newsletter.set_default_on_process(false);

        let password: Field<String> = Field::new(&mut form, "password");
        let confirm: Field<String> = Field::new(&mut form, "confirm");
        form.add_validator_fn(move |values, result| {
            if password.value_from(values) != confirm.value_from(values) {
                result.add_general_error(ErrorKind::Custom, "Passwords do not match.");
            }
        });

        Self {
            form,
            username,
            age,
            plan,
            birth_year,
            newsletter,
        }
    }
}

fn main() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();

    println!("=== Signup Form Example ===\n");

    let signup = SignupForm::new();

    // Scenario 1: Valid submission
    println!("--- Scenario 1: Valid Submission ---");

    let mut params = QueryParams::new();
    params.append("username", "ferris");
    params.append("age", "29");
    params.append("plan", "TEAM");
    params.append("birth_year", "1997");
    params.append("newsletter", "yes");
    params.append("password", "hunter22");
    params.append("confirm", "hunter22");

    let result = signup.form.process_query(&params);
    println!("Result: {}", result);
    println!("username   = {:?}", signup.username.value());
    println!("age        = {:?}", signup.age.value());
    println!("plan       = {:?}", signup.plan.value());
    println!("birth_year = {:?}", signup.birth_year.value());
    println!("newsletter = {:?}", signup.newsletter.value());

    // Scenario 2: Invalid submission
    println!("\n--- Scenario 2: Invalid Submission ---");

    let mut params = QueryParams::new();
    params.append("username", "fe");
    params.append("age", "twelve");
    params.append("plan", "gold");
    params.append("birth_year", "1850");
    params.append("password", "hunter22");
    params.append("confirm", "hunter23");

    let result = signup.form.process_query(&params);
    println!("Result: {}", result);
    for error in result.errors() {
        match &error.field {
            Some(field) => println!("✗ [{}] {}: {}", error.kind, field, error),
            None => println!("✗ [{}] {}", error.kind, error),
        }
    }
    // Values still bind, with defaults where coercion failed.
    println!("plan       = {:?}", signup.plan.value());
    println!("newsletter = {:?}", signup.newsletter.value());

    // Scenario 3: Selected options
    println!("\n--- Scenario 3: Selected Options ---");

    signup.birth_year.set_value(1990);
    let selected: Vec<String> = signup
        .birth_year
        .options()
        .iter()
        .filter(|option| option.is_selected())
        .map(|option| option.label().to_string())
        .collect();
    println!("Selected birth year: {:?}", selected);

    // Scenario 4: Combining forms
    println!("\n--- Scenario 4: Combined Results ---");

    let mut address = RequestForm::new();
    let zip: NumberField<i32> = NumberField::new(&mut address, "zip");
    zip.set_required(true);

    let mut params = QueryParams::new();
    params.append("username", "ferris");
    params.append("age", "29");

    let mut combined = CombinedResult::new();
    combined
        .add_result(signup.form.process_query(&params))
        .add_result(address.process_query(&params));
    println!("Combined: {}", combined);
    println!("passed = {}, failed = {}", combined.passed(), combined.failed());

    match combined.ensure_passed() {
        Ok(()) => println!("✓ Submission accepted"),
        Err(error) => println!("✗ {}", error),
    }

    println!("\n=== Example Complete ===");
}
