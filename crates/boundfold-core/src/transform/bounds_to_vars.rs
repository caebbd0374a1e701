//! Fold single-variable linear constraints into variable bounds.
//!
//! A constraint of the form `lower <= k*x + c <= upper` restricts only `x`.
//! Its implied bounds `(upper - c) / k` and `(lower - c) / k` are moved onto
//! `x` when they tighten the existing ones, and the constraint is
//! deactivated. Division by a negative `k` swaps the side each bound lands on.
//!
//! Constraints that are nonlinear or involve more or fewer than one variable
//! are left untouched.

use std::time::Instant;

use boundfold_expr::ids::{ConstraintId, VariableId};
use boundfold_expr::repn::{Decompose, Repn, StandardDecomposer};

use crate::model::Model;
use crate::transform::Transformation;
use crate::transform::config::FoldConfig;
use crate::transform::error::TransformError;
use crate::transform::report::{BoundSide, BoundUpdate, FoldReport, ValueRepair};

/// Registered name of [`ConstraintToVarBound`].
pub const CONSTRAINTS_TO_VAR_BOUNDS: &str = "contrib.constraints_to_var_bounds";

/// Moves bounds implied by single-variable linear constraints onto the
/// variable and deactivates those constraints.
///
/// Bounds are only ever tightened. After a constraint is deactivated the
/// variable's value, if any, is clamped into its bounds, since the variable
/// may no longer appear in any active constraint.
#[derive(Debug, Clone)]
pub struct ConstraintToVarBound<D = StandardDecomposer> {
    config: FoldConfig,
    decomposer: D,
}

impl ConstraintToVarBound {
    /// Create the pass with the default configuration and decomposer.
    pub fn new() -> Self {
        Self {
            config: FoldConfig::default(),
            decomposer: StandardDecomposer::new(),
        }
    }

    /// Create the pass with a custom configuration.
    pub fn with_config(config: FoldConfig) -> Result<Self, TransformError> {
        Self::with_decomposer(config, StandardDecomposer::new())
    }
}

impl Default for ConstraintToVarBound {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: Decompose> ConstraintToVarBound<D> {
    /// Create the pass with a custom linear-form decomposition service.
    pub fn with_decomposer(config: FoldConfig, decomposer: D) -> Result<Self, TransformError> {
        config.validate()?;
        Ok(Self { config, decomposer })
    }

    pub fn config(&self) -> &FoldConfig {
        &self.config
    }

    fn is_degenerate(&self, coefficient: f64) -> bool {
        coefficient == 0.0 || coefficient.abs() < self.config.zero_tolerance
    }

    /// Examine one constraint and fold it if it bounds a single variable.
    fn fold_constraint(
        &self,
        model: &mut Model,
        constraint_id: ConstraintId,
        report: &mut FoldReport,
    ) -> Result<(), TransformError> {
        let constraint = model.get_constraint(constraint_id)?;
        let (lower, upper) = (constraint.lower, constraint.upper);
        let repn = self.decomposer.decompose(&constraint.body, &*model)?;

        let form = match repn {
            Repn::Linear(form) => form,
            Repn::Nonlinear { degree } => {
                tracing::trace!(
                    component = "transform",
                    operation = CONSTRAINTS_TO_VAR_BOUNDS,
                    status = "skipped",
                    constraint_id = constraint_id.inner(),
                    degree,
                    "Constraint is nonlinear"
                );
                report.skipped_nonlinear += 1;
                return Ok(());
            }
        };
        let Some((variable, coefficient)) = form.single_term() else {
            tracing::trace!(
                component = "transform",
                operation = CONSTRAINTS_TO_VAR_BOUNDS,
                status = "skipped",
                constraint_id = constraint_id.inner(),
                variables = form.num_variables(),
                "Constraint does not reference exactly one variable"
            );
            report.skipped_non_single += 1;
            return Ok(());
        };
        let constant = form.constant();

        if self.is_degenerate(coefficient) {
            report.degenerate += 1;
        } else {
            let (upper_side, lower_side) = if coefficient > 0.0 {
                (BoundSide::Upper, BoundSide::Lower)
            } else {
                (BoundSide::Lower, BoundSide::Upper)
            };
            if let Some(upper) = upper {
                let implied = (upper - constant) / coefficient;
                tighten(model, constraint_id, variable, upper_side, implied, report)?;
            }
            if let Some(lower) = lower {
                let implied = (lower - constant) / coefficient;
                tighten(model, constraint_id, variable, lower_side, implied, report)?;
            }
        }

        model.deactivate_constraint(constraint_id)?;
        report.deactivated += 1;
        tracing::debug!(
            component = "transform",
            operation = CONSTRAINTS_TO_VAR_BOUNDS,
            status = "success",
            constraint_id = constraint_id.inner(),
            constraint_name = model.get_constraint_name(constraint_id).unwrap_or(""),
            variable_id = variable.inner(),
            variable_name = model.get_variable_name(variable).unwrap_or(""),
            coefficient,
            degenerate = self.is_degenerate(coefficient),
            "Deactivated single-variable constraint"
        );

        repair_value(model, variable, report)
    }
}

/// Apply `candidate` to one side of `variable` if it is tighter.
fn tighten(
    model: &mut Model,
    constraint: ConstraintId,
    variable: VariableId,
    side: BoundSide,
    candidate: f64,
    report: &mut FoldReport,
) -> Result<(), TransformError> {
    // Overflow away from the variable's domain bounds nothing; towards it,
    // or to NaN, no value can satisfy the constraint.
    let unbounding = match side {
        BoundSide::Lower => f64::NEG_INFINITY,
        BoundSide::Upper => f64::INFINITY,
    };
    if candidate == unbounding {
        return Ok(());
    }
    if !candidate.is_finite() {
        return Err(TransformError::UnsatisfiableBound {
            constraint,
            value: candidate,
        });
    }

    let previous = match side {
        BoundSide::Lower => model.lower_bound(variable)?,
        BoundSide::Upper => model.upper_bound(variable)?,
    };
    let current = match (side, previous) {
        (_, None) => candidate,
        (BoundSide::Lower, Some(existing)) => existing.max(candidate),
        (BoundSide::Upper, Some(existing)) => existing.min(candidate),
    };
    if previous == Some(current) {
        return Ok(());
    }

    match side {
        BoundSide::Lower => model.set_lower_bound(variable, Some(current))?,
        BoundSide::Upper => model.set_upper_bound(variable, Some(current))?,
    }
    tracing::debug!(
        component = "transform",
        operation = "tighten_bound",
        status = "success",
        variable_id = variable.inner(),
        variable_name = model.get_variable_name(variable).unwrap_or(""),
        side = side.as_str(),
        previous = ?previous,
        current,
        "Tightened variable bound"
    );
    report.bound_updates.push(BoundUpdate {
        constraint,
        variable,
        side,
        previous,
        current,
    });
    Ok(())
}

/// Clamp the variable's value into its bounds, lower first.
fn repair_value(
    model: &mut Model,
    variable: VariableId,
    report: &mut FoldReport,
) -> Result<(), TransformError> {
    let Some(previous) = model.value(variable)? else {
        return Ok(());
    };

    let mut current = previous;
    if let Some(lower) = model.lower_bound(variable)? {
        if current < lower {
            current = lower;
        }
    }
    if let Some(upper) = model.upper_bound(variable)? {
        if current > upper {
            current = upper;
        }
    }
    if current == previous {
        return Ok(());
    }

    model.set_value(variable, Some(current))?;
    tracing::debug!(
        component = "transform",
        operation = "repair_value",
        status = "success",
        variable_id = variable.inner(),
        variable_name = model.get_variable_name(variable).unwrap_or(""),
        previous,
        current,
        "Moved variable value inside its bounds"
    );
    report.value_repairs.push(ValueRepair {
        variable,
        previous,
        current,
    });
    Ok(())
}

impl<D: Decompose> Transformation for ConstraintToVarBound<D> {
    type Report = FoldReport;

    fn name(&self) -> &'static str {
        CONSTRAINTS_TO_VAR_BOUNDS
    }

    fn apply_to(&self, model: &mut Model) -> Result<FoldReport, TransformError> {
        let started = Instant::now();
        let mut report = FoldReport::default();

        let candidates = model
            .active_constraints(self.config.descend_into)
            .collect::<Vec<_>>();
        for constraint_id in candidates {
            report.visited += 1;
            self.fold_constraint(model, constraint_id, &mut report)?;
        }

        tracing::info!(
            component = "transform",
            operation = CONSTRAINTS_TO_VAR_BOUNDS,
            status = "success",
            visited = report.visited,
            deactivated = report.deactivated,
            degenerate = report.degenerate,
            bound_updates = report.bound_updates.len(),
            value_repairs = report.value_repairs.len(),
            duration_ms = started.elapsed().as_secs_f64() * 1000.0,
            "Folded single-variable constraints into variable bounds"
        );
        Ok(report)
    }
}
