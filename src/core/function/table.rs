// SPDX-License-Identifier: MIT OR Apache-2.0

//! Registry of resolvers keyed by operator name and syntax.

use log::{debug, info, warn};
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;

use super::case_match::CASE_MATCH_RESOLVER;
use super::case_test::CASE_TEST_RESOLVER;
use super::cast::CAST_RESOLVER;
use super::fun_def::{FunDef, FunInfo, Resolver};
use super::operators::OPERATORS;
use crate::core::error::{MdxError, MdxResult};
use crate::core::validation::{ConversionCounter, Validator};
use crate::query_api::definition::Category;
use crate::query_api::expression::{Expression, Syntax};

/// Catalog entry describing one registered operator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FunctionDescriptor {
    pub name: &'static str,
    pub syntax: Syntax,
    pub signature: &'static str,
    pub description: &'static str,
    /// Number of overloads sharing this entry
    pub overloads: usize,
}

/// Operator lookup table.
///
/// Names are matched case-insensitively. Every resolver registered for a
/// (name, syntax) pair is tried with a fresh [`ConversionCounter`]; the
/// match with the lowest count wins and equal lowest counts are reported
/// as ambiguous.
#[derive(Debug, Default)]
pub struct FunctionTable {
    resolvers: HashMap<(String, Syntax), Vec<&'static dyn Resolver>>,
}

impl FunctionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Table holding CASE, CAST and the standard operators.
    pub fn standard() -> Self {
        let mut table = Self::new();
        table.register(&CASE_MATCH_RESOLVER);
        table.register(&CASE_TEST_RESOLVER);
        table.register(&CAST_RESOLVER);
        for resolver in OPERATORS {
            table.register(resolver);
        }
        info!(
            "Built standard function table: {} resolvers for {} operators",
            table.resolver_count(),
            table.resolvers.len()
        );
        table
    }

    pub fn register(&mut self, resolver: &'static dyn Resolver) {
        let info = resolver.info();
        self.resolvers
            .entry(Self::key(info.name, info.syntax))
            .or_default()
            .push(resolver);
    }

    pub fn contains(&self, name: &str, syntax: Syntax) -> bool {
        self.resolvers.contains_key(&Self::key(name, syntax))
    }

    pub fn resolver_count(&self) -> usize {
        self.resolvers.values().map(Vec::len).sum()
    }

    /// Picks the cheapest definition for `name` applied to `args`.
    pub fn resolve(
        &self,
        name: &str,
        syntax: Syntax,
        args: &[Expression],
        validator: &dyn Validator,
    ) -> MdxResult<Arc<dyn FunDef>> {
        let candidates = self
            .resolvers
            .get(&Self::key(name, syntax))
            .ok_or_else(|| MdxError::unknown_function(name, syntax))?;

        let mut best: Option<(u32, Arc<dyn FunDef>)> = None;
        let mut ties = 0;
        for resolver in candidates {
            let mut counter = ConversionCounter::new();
            let Some(fun_def) = resolver.resolve(args, validator, &mut counter)? else {
                debug!("{} {}: {:?} does not match", syntax, name, resolver);
                continue;
            };
            let cost = counter.count();
            debug!(
                "{} {}: candidate {:?} matches at cost {}",
                syntax,
                name,
                fun_def.parameter_categories(),
                cost
            );
            match best.as_ref().map(|(best_cost, _)| *best_cost) {
                Some(best_cost) if cost > best_cost => {}
                Some(best_cost) if cost == best_cost => ties += 1,
                _ => {
                    best = Some((cost, fun_def));
                    ties = 1;
                }
            }
        }

        let categories = args.iter().map(Expression::category).collect::<Vec<Category>>();
        match best {
            None => Err(MdxError::no_function_matches(name, syntax, &categories)),
            Some(_) if ties > 1 => {
                warn!("{} {}: {} candidates tie for {:?}", syntax, name, ties, categories);
                Err(MdxError::ambiguous_function(name, syntax, &categories, ties))
            }
            Some((cost, fun_def)) => {
                debug!("{} {}: resolved at cost {}", syntax, name, cost);
                Ok(fun_def)
            }
        }
    }

    /// One entry per distinct operator, sorted by name then syntax.
    pub fn catalog(&self) -> Vec<FunctionDescriptor> {
        let mut catalog: Vec<FunctionDescriptor> = Vec::new();
        for resolver in self.resolvers.values().flatten() {
            let info: &FunInfo = resolver.info();
            match catalog
                .iter_mut()
                .find(|d| d.name == info.name && d.syntax == info.syntax && d.signature == info.signature)
            {
                Some(descriptor) => descriptor.overloads += 1,
                None => catalog.push(FunctionDescriptor {
                    name: info.name,
                    syntax: info.syntax,
                    signature: info.signature,
                    description: info.description,
                    overloads: 1,
                }),
            }
        }
        catalog.sort_by(|a, b| {
            a.name
                .cmp(b.name)
                .then_with(|| a.syntax.as_str().cmp(b.syntax.as_str()))
        });
        catalog
    }

    pub fn catalog_json(&self) -> MdxResult<String> {
        serde_json::to_string_pretty(&self.catalog())
            .map_err(|e| MdxError::internal(format!("Failed to serialize function catalog: {e}")))
    }

    fn key(name: &str, syntax: Syntax) -> (String, Syntax) {
        (name.to_uppercase(), syntax)
    }
}
