/*! Test coverage for the target AST model.
 *
 * The model only promises local invariants: validated integer widths, the per-expression
 * parenthesisation flag, and append-only document order. These tests pin those down.
 */

mod document_tests;
