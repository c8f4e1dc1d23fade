//! Railway-style validation with the disjoint result context.
//!
//! Each step either passes a refined value down the chain (`Right`) or
//! terminates it (`Left`); composition never branches on which happened.
//!
//! Run with: `cargo run --example chained_validation`

use contextual_core::contract::Monad;
use contextual_core::then::ThenExt;
use contextual_core::trace::Traced;
use contextual_either::Either;

fn parse_age(raw: &str) -> Either<String, u32> {
    match raw.trim().parse::<u32>() {
        Ok(age) => Either::Right(age),
        Err(_) => Either::Left(format!("'{raw}' is not a number")),
    }
}

fn check_plausible(age: u32) -> Either<String, u32> {
    if age < 130 {
        Either::Right(age)
    } else {
        Either::Left(format!("{age} is not a plausible age"))
    }
}

fn validate(raw: &str) -> Either<String, String> {
    Either::insert(raw)
        .bind(parse_age)
        .bind(check_plausible)
        .then_value(|age| format!("age {age} accepted"))
}

fn main() {
    for raw in ["42", "grandma", "3000"] {
        println!("{raw:>8} -> {}", validate(raw));
    }

    // The same chain under observation: the trace shows which steps the
    // terminated context short-circuited past.
    let (outcome, trace) = Traced::new(Either::insert("grandma"))
        .bind(parse_age)
        .bind(check_plausible)
        .fmap(|age| format!("age {age} accepted"))
        .into_parts();

    println!("\nchain outcome: {outcome}");
    println!("chain trace:\n{trace}");
}
