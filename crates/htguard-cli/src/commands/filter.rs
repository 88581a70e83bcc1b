//! Pingback filter commands
//!
//! Host scripts pipe their XML-RPC method table or response headers through
//! these as a JSON object and read the filtered object back.

use std::collections::HashMap;
use std::io::Read;

use htguard_core::PingbackSuppressor;
use serde_json::Value;

use crate::context::SiteContext;
use crate::error::{CliError, Result};

/// Filter a method table read from stdin.
pub fn run_filter_methods(ctx: &SiteContext) -> Result<()> {
    let input = read_stdin()?;
    println!("{}", filter_methods_json(ctx, &input)?);
    Ok(())
}

/// Filter a header map read from stdin.
pub fn run_filter_headers(ctx: &SiteContext) -> Result<()> {
    let input = read_stdin()?;
    println!("{}", filter_headers_json(ctx, &input)?);
    Ok(())
}

fn read_stdin() -> Result<String> {
    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input)?;
    Ok(input)
}

fn suppressor(ctx: &SiteContext) -> Result<PingbackSuppressor> {
    Ok(PingbackSuppressor::from_settings(&ctx.settings()?))
}

fn parse_object(input: &str) -> Result<HashMap<String, Value>> {
    match serde_json::from_str::<Value>(input)? {
        Value::Object(map) => Ok(map.into_iter().collect()),
        _ => Err(CliError::user("Expected a JSON object on stdin")),
    }
}

fn to_sorted_json(map: HashMap<String, Value>) -> Result<String> {
    let sorted: serde_json::Map<String, Value> = map.into_iter().collect();
    Ok(serde_json::to_string_pretty(&Value::Object(sorted))?)
}

pub(crate) fn filter_methods_json(ctx: &SiteContext, input: &str) -> Result<String> {
    let methods = parse_object(input)?;
    to_sorted_json(suppressor(ctx)?.filter_methods(methods))
}

pub(crate) fn filter_headers_json(ctx: &SiteContext, input: &str) -> Result<String> {
    let headers = parse_object(input)?;
    to_sorted_json(suppressor(ctx)?.filter_headers(headers))
}
