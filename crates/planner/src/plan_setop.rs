//! Planning of two-sided set operations
//!
//! Both sides are planned recursively, coerced to the declared output
//! types with a cast projection where needed, and joined under either a
//! plain union or a fixed-point operator. The recursive variant is chosen
//! exactly when the right side observed a reference to the CTE name being
//! defined; the flag for unresolved nested subqueries is OR-ed across the
//! children and propagated upward.

use crate::bound::{BoundQueryNode, BoundRecursiveCteNode};
use crate::error::{PlanError, PlanResult};
use crate::expression::BoundExpression;
use crate::operator::LogicalOperator;
use lamina_core::LogicalType;
use tracing::debug;

/// Recursive planner turning bound query nodes into operator trees
#[derive(Debug, Default)]
pub struct LogicalPlanGenerator {
    /// Whether any planned child still contains unplanned subqueries;
    /// propagated upward so an outer planner can finish the job
    pub has_unplanned_subqueries: bool,
}

impl LogicalPlanGenerator {
    /// Create a fresh generator
    pub fn new() -> Self {
        LogicalPlanGenerator {
            has_unplanned_subqueries: false,
        }
    }

    /// Plan a bound query node into a single-rooted operator tree
    pub fn create_plan(&mut self, node: &BoundQueryNode) -> PlanResult<LogicalOperator> {
        match node {
            BoundQueryNode::Select(select) => {
                self.has_unplanned_subqueries |= select.has_unplanned_subqueries;
                Ok(LogicalOperator::Get {
                    table_index: select.table_index,
                    types: select.types.clone(),
                })
            }
            BoundQueryNode::CteRef(cte_ref) => Ok(LogicalOperator::CteScan {
                table_index: cte_ref.table_index,
                types: cte_ref.types.clone(),
            }),
            BoundQueryNode::SetOperation(setop) => self.plan_recursive_cte(setop),
        }
    }

    fn plan_recursive_cte(&mut self, node: &BoundRecursiveCteNode) -> PlanResult<LogicalOperator> {
        // each side is planned by its own generator so the subquery flags
        // can be collected independently
        let mut generator_left = LogicalPlanGenerator::new();
        let mut generator_right = LogicalPlanGenerator::new();

        let left_node = generator_left.create_plan(&node.left)?;
        let right_node = generator_right.create_plan(&node.right)?;

        self.has_unplanned_subqueries |= generator_left.has_unplanned_subqueries
            || generator_right.has_unplanned_subqueries;

        // coerce both sides to the declared output types
        let left_node = cast_operator_to_types(node.left.types(), &node.types, left_node)?;
        let right_node = cast_operator_to_types(node.right.types(), &node.types, right_node)?;

        if node.right_binder.cte_reference_count(&node.ctename) == 0 {
            debug!(cte = %node.ctename, "planning non-recursive set union");
            return Ok(LogicalOperator::Union {
                table_index: node.setop_index,
                column_count: node.types.len(),
                left: Box::new(left_node),
                right: Box::new(right_node),
            });
        }
        debug!(cte = %node.ctename, union_all = node.union_all, "planning recursive cte");
        Ok(LogicalOperator::RecursiveCte {
            table_index: node.setop_index,
            column_count: node.types.len(),
            union_all: node.union_all,
            left: Box::new(left_node),
            right: Box::new(right_node),
        })
    }
}

/// Wrap `op` in a cast projection so it produces `target_types`
///
/// Returns the operator unchanged when the types already line up;
/// otherwise builds one projection with a column reference per position,
/// cast where the source and target types differ.
pub fn cast_operator_to_types(
    source_types: &[LogicalType],
    target_types: &[LogicalType],
    op: LogicalOperator,
) -> PlanResult<LogicalOperator> {
    if source_types.len() != target_types.len() {
        return Err(PlanError::ColumnCountMismatch {
            expected: target_types.len(),
            actual: source_types.len(),
        });
    }
    if source_types == target_types {
        return Ok(op);
    }
    let expressions = source_types
        .iter()
        .zip(target_types.iter())
        .enumerate()
        .map(|(index, (source, target))| {
            let column = BoundExpression::ColumnRef {
                index,
                ty: *source,
            };
            if source == target {
                column
            } else {
                BoundExpression::Cast {
                    child: Box::new(column),
                    source: *source,
                    target: *target,
                }
            }
        })
        .collect();
    Ok(LogicalOperator::Projection {
        expressions,
        child: Box::new(op),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bound::{BinderContext, BoundCteRefNode, BoundSelectNode};

    fn select(table_index: usize, types: Vec<LogicalType>) -> BoundQueryNode {
        BoundQueryNode::Select(BoundSelectNode {
            table_index,
            types,
            has_unplanned_subqueries: false,
        })
    }

    fn setop_node(
        right: BoundQueryNode,
        right_binder: BinderContext,
        union_all: bool,
    ) -> BoundQueryNode {
        BoundQueryNode::SetOperation(Box::new(BoundRecursiveCteNode {
            ctename: "t".to_string(),
            setop_index: 7,
            union_all,
            types: vec![LogicalType::BigInt],
            left: select(1, vec![LogicalType::Integer]),
            right,
            left_binder: BinderContext::new(),
            right_binder,
        }))
    }

    #[test]
    fn test_plain_union_when_cte_is_never_referenced() {
        let node = setop_node(
            select(2, vec![LogicalType::BigInt]),
            BinderContext::new(),
            false,
        );
        let mut generator = LogicalPlanGenerator::new();
        let plan = generator.create_plan(&node).unwrap();
        match plan {
            LogicalOperator::Union {
                table_index,
                column_count,
                left,
                right,
            } => {
                assert_eq!(table_index, 7);
                assert_eq!(column_count, 1);
                // the Integer side got a cast projection, the BigInt side
                // is used as-is
                assert!(matches!(*left, LogicalOperator::Projection { .. }));
                assert!(matches!(*right, LogicalOperator::Get { .. }));
                assert_eq!(left.types(), vec![LogicalType::BigInt]);
            }
            other => panic!("expected union, got {other:?}"),
        }
    }

    #[test]
    fn test_recursive_cte_when_right_side_references_it() {
        let mut right_binder = BinderContext::new();
        right_binder.add_cte_reference("t");
        let right = BoundQueryNode::CteRef(BoundCteRefNode {
            table_index: 7,
            types: vec![LogicalType::BigInt],
        });
        let node = setop_node(right, right_binder, true);
        let mut generator = LogicalPlanGenerator::new();
        let plan = generator.create_plan(&node).unwrap();
        match plan {
            LogicalOperator::RecursiveCte {
                table_index,
                union_all,
                left: _,
                right,
                ..
            } => {
                assert_eq!(table_index, 7);
                assert!(union_all);
                assert!(matches!(*right, LogicalOperator::CteScan { .. }));
            }
            other => panic!("expected recursive cte, got {other:?}"),
        }
    }

    #[test]
    fn test_reference_to_other_cte_does_not_recurse() {
        let mut right_binder = BinderContext::new();
        right_binder.add_cte_reference("unrelated");
        let node = setop_node(
            select(2, vec![LogicalType::BigInt]),
            right_binder,
            false,
        );
        let mut generator = LogicalPlanGenerator::new();
        let plan = generator.create_plan(&node).unwrap();
        assert!(matches!(plan, LogicalOperator::Union { .. }));
    }

    #[test]
    fn test_subquery_flag_propagates_from_either_side() {
        let right = BoundQueryNode::Select(BoundSelectNode {
            table_index: 2,
            types: vec![LogicalType::BigInt],
            has_unplanned_subqueries: true,
        });
        let node = setop_node(right, BinderContext::new(), false);
        let mut generator = LogicalPlanGenerator::new();
        generator.create_plan(&node).unwrap();
        assert!(generator.has_unplanned_subqueries);
    }

    #[test]
    fn test_column_count_mismatch_is_rejected() {
        let node = setop_node(
            select(2, vec![LogicalType::BigInt, LogicalType::Varchar]),
            BinderContext::new(),
            false,
        );
        let mut generator = LogicalPlanGenerator::new();
        let err = generator.create_plan(&node).unwrap_err();
        assert_eq!(
            err,
            PlanError::ColumnCountMismatch {
                expected: 1,
                actual: 2
            }
        );
    }

    #[test]
    fn test_matching_types_skip_the_projection() {
        let node = setop_node(
            select(2, vec![LogicalType::BigInt]),
            BinderContext::new(),
            false,
        );
        let mut generator = LogicalPlanGenerator::new();
        let plan = generator.create_plan(&node).unwrap();
        if let LogicalOperator::Union { right, .. } = plan {
            assert!(matches!(*right, LogicalOperator::Get { .. }));
        } else {
            panic!("expected union");
        }
    }
}
