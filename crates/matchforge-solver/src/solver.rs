//! The solver: generation, filtering, evaluation and aggregation.

use std::collections::HashSet;
use std::ops::ControlFlow;
use std::sync::Arc;

use rayon::prelude::*;
use tracing::{debug, info, trace};

use matchforge_config::{MoveCount, MoveThreadCount, SolverConfig};
use matchforge_core::{
    canonicalize, tokenize_variants, MatchForgeError, Result, RuleRegistry, RuleSet,
    TokenSequence,
};
use matchforge_scoring::{arithmetic_text, has_doubled_operators, is_plausible, Evaluator};

use crate::event::{SolverEventListener, SolverEventSupport};
use crate::heuristic::strategy::generate_all;
use crate::heuristic::{MutationArena, MutationStrategy};
use crate::result::SolveResult;
use crate::statistics::StatisticsCollector;
use crate::termination::{MutationCountTermination, OrTermination, Termination, TimeTermination};

#[derive(Debug)]
enum Evaluation {
    Sequential,
    GlobalPool,
    Pool(rayon::ThreadPool),
}

/// Finds the true equations one move away from a given equation.
///
/// A solver is bound to one rule set and one configuration and keeps no
/// state between calls, so it can be shared across threads.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use matchforge_config::SolverConfig;
/// use matchforge_core::standard_rules;
/// use matchforge_solver::Solver;
///
/// let solver = Solver::new(Arc::new(standard_rules()), SolverConfig::default()).unwrap();
/// let result = solver.solve("6-5=17").unwrap();
/// assert_eq!(result.solutions, vec!["6+5=11"]);
/// ```
#[derive(Debug)]
pub struct Solver {
    rules: Arc<RuleSet>,
    config: SolverConfig,
    evaluator: Evaluator,
    evaluation: Evaluation,
    event_support: SolverEventSupport,
}

impl Solver {
    /// Creates a solver over `rules`.
    ///
    /// # Errors
    ///
    /// Returns [`MatchForgeError::Config`] when the configuration is invalid
    /// or the evaluation thread pool cannot be built.
    pub fn new(rules: Arc<RuleSet>, config: SolverConfig) -> Result<Self> {
        config
            .validate()
            .map_err(|e| MatchForgeError::Config(e.to_string()))?;

        let evaluation = match config.move_thread_count {
            MoveThreadCount::None => Evaluation::Sequential,
            MoveThreadCount::Auto => Evaluation::GlobalPool,
            MoveThreadCount::Count(threads) => {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .thread_name(|i| format!("matchforge-eval-{i}"))
                    .build()
                    .map_err(|e| MatchForgeError::Config(e.to_string()))?;
                Evaluation::Pool(pool)
            }
        };

        Ok(Self {
            rules,
            evaluator: Evaluator::new(config.epsilon),
            config,
            evaluation,
            event_support: SolverEventSupport::new(),
        })
    }

    /// Creates a solver over the rule set registered under `config.mode`.
    ///
    /// The registry's active mode is not consulted; see
    /// [`from_active_mode`](Self::from_active_mode).
    pub fn from_registry(registry: &RuleRegistry, config: SolverConfig) -> Result<Self> {
        let rules = registry.rule_set(&config.mode)?;
        Self::new(rules, config)
    }

    /// Creates a solver over the registry's active mode, overriding `config.mode`.
    pub fn from_active_mode(registry: &RuleRegistry, config: SolverConfig) -> Result<Self> {
        let rules = registry.active_rule_set()?;
        let config = match registry.active_mode() {
            Some(mode) => config.with_mode(mode),
            None => config,
        };
        Self::new(rules, config)
    }

    /// Adds an event listener.
    pub fn with_listener(mut self, listener: Arc<dyn SolverEventListener>) -> Self {
        self.event_support.add_listener(listener);
        self
    }

    pub fn event_support_mut(&mut self) -> &mut SolverEventSupport {
        &mut self.event_support
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    pub fn rules(&self) -> &Arc<RuleSet> {
        &self.rules
    }

    /// Solves `equation`.
    ///
    /// # Errors
    ///
    /// Returns [`MatchForgeError::UnknownGlyph`] when the input cannot be
    /// tokenized. Candidate equations that fail to evaluate are never errors.
    pub fn solve(&self, equation: &str) -> Result<SolveResult> {
        let move_count = self.config.move_count;
        info!(
            event = "solve_start",
            equation = equation,
            mode = %self.config.mode,
            move_count = move_count.get(),
            max_mutations = self.config.max_mutations,
        );
        let variants = tokenize_variants(&canonicalize(equation))?;
        let original = variants[0].normalized();
        self.event_support.fire_solving_started(equation);

        let collector = StatisticsCollector::new();

        let termination = OrTermination::new((
            MutationCountTermination::new(self.config.max_mutations),
            self.config.time_limit().map(TimeTermination::new),
        ));
        let mut arena = MutationArena::new(termination);

        for (index, variant) in variants.iter().enumerate() {
            let flow = self.generate_variant(index, variant, &mut arena, &collector);
            debug!(
                event = "variant",
                variant = index,
                tokens = variant.len(),
                mutations = arena.len(),
            );
            self.event_support
                .fire_variant_generated(index, variant, arena.len());
            if flow.is_break() {
                break;
            }
        }

        let terminated_early = arena.is_terminated();
        let candidates = arena.into_mutations();
        let total_mutations = candidates.len();

        let plausible: Vec<&TokenSequence> =
            candidates.iter().filter(|c| is_plausible(c)).collect();
        let verdicts = self.evaluate_all(&plausible, &collector);

        let mut solutions = Vec::new();
        let mut others = Vec::new();
        for (candidate, valid) in plausible.iter().zip(verdicts) {
            if valid {
                solutions.push(*candidate);
            } else {
                others.push(*candidate);
            }
        }

        if move_count == MoveCount::Two {
            let one_stick = self.one_stick_solutions(&variants[0]);
            solutions.retain(|s| {
                !one_stick.contains(&s.normalized()) && !has_doubled_operators(&arithmetic_text(s))
            });
        }

        let mut solutions = unique_normalized(&solutions);
        solutions.retain(|s| *s != original);
        let others = unique_normalized(&others);

        let statistics = collector.into_statistics(
            variants.len(),
            total_mutations as u64,
            plausible.len() as u64,
            terminated_early,
        );

        for solution in &solutions {
            trace!(event = "solution", equation = %solution);
        }
        info!(
            event = "solve_end",
            solutions = solutions.len(),
            others = others.len(),
            mutations = total_mutations,
            duration_ms = statistics.duration.as_millis() as u64,
            speed = statistics.mutation_speed(),
            terminated_early = terminated_early,
        );

        let result = SolveResult {
            equation: original,
            solutions,
            others,
            total_mutations,
            statistics,
        };
        self.event_support.fire_solving_ended(&result);
        Ok(result)
    }

    /// Structural validity and truth of `equation` as written.
    pub fn check(&self, equation: &str) -> Result<(bool, bool)> {
        let variants = tokenize_variants(&canonicalize(equation))?;
        let seq = &variants[0];
        Ok((
            self.evaluator.is_valid_expression(seq),
            self.evaluator.evaluate(seq),
        ))
    }

    fn generate_variant<T: Termination>(
        &self,
        index: usize,
        variant: &TokenSequence,
        arena: &mut MutationArena<T>,
        collector: &StatisticsCollector,
    ) -> ControlFlow<()> {
        for strategy in MutationStrategy::pipeline(self.config.move_count) {
            let before = arena.len();
            let flow = strategy.generate(variant, &self.rules, arena);
            let produced = arena.len() - before;

            collector.record_strategy(strategy.name(), produced as u64);
            debug!(
                event = "strategy",
                variant = index,
                strategy = strategy.name(),
                mutations = produced,
            );
            flow?;
        }
        ControlFlow::Continue(())
    }

    /// Evaluates candidates, preserving their order.
    fn evaluate_all(
        &self,
        candidates: &[&TokenSequence],
        collector: &StatisticsCollector,
    ) -> Vec<bool> {
        let evaluate = |seq: &&TokenSequence| {
            let valid = self.evaluator.evaluate(seq);
            collector.record_evaluation(valid);
            valid
        };
        match &self.evaluation {
            Evaluation::Sequential => candidates.iter().map(evaluate).collect(),
            Evaluation::GlobalPool => candidates.par_iter().map(evaluate).collect(),
            Evaluation::Pool(pool) => {
                pool.install(|| candidates.par_iter().map(evaluate).collect())
            }
        }
    }

    /// True equations reachable with one stick from `plain`, ignoring the budget.
    fn one_stick_solutions(&self, plain: &TokenSequence) -> HashSet<String> {
        let mut arena = MutationArena::unbounded();
        let _ = generate_all(plain, &self.rules, MoveCount::One, &mut arena);
        arena
            .iter()
            .filter(|seq| self.evaluator.evaluate(seq))
            .map(TokenSequence::normalized)
            .collect()
    }
}

/// Normalizes and drops repeats, keeping first occurrences in order.
fn unique_normalized(sequences: &[&TokenSequence]) -> Vec<String> {
    let mut seen = HashSet::new();
    sequences
        .iter()
        .map(|seq| seq.normalized())
        .filter(|text| seen.insert(text.clone()))
        .collect()
}
