use std::collections::HashMap;

use super::Planner;
use crate::error::PlanError;
use crate::lexer::Lexer;

#[path = "basic.rs"]
mod basic;
#[path = "redirections.rs"]
mod redirections;
#[path = "errors.rs"]
mod errors;

fn plan(input: &str) -> Result<crate::ast::CommandList, PlanError> {
    let tokens = Lexer::tokenize(input).expect("fixture input must lex cleanly");
    Planner::plan(&tokens, &HashMap::new())
}

fn plan_with_env(input: &str, env: &HashMap<String, String>) -> Result<crate::ast::CommandList, PlanError> {
    let tokens = Lexer::tokenize(input).expect("fixture input must lex cleanly");
    Planner::plan(&tokens, env)
}
