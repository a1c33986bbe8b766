use super::*;

#[test]
fn direct_dependencies_hold_after_deduction() {
    let mut m = DependencyMatrix::new(3);
    m.set_direct(0, 1);
    m.deduce();
    assert!(m.depends_on(0, 1));
    assert!(!m.depends_on(1, 0));
    assert!(!m.depends_on(0, 2));
}

#[test]
fn transitive_closure_marks_indirect() {
    let mut m = DependencyMatrix::new(3);
    m.set_direct(0, 1);
    m.set_direct(1, 2);
    m.deduce();
    assert!(m.depends_on(0, 2));
    assert!(m.depends_on_any(0));
    assert!(m.depends_on_any(1));
    assert!(!m.depends_on_any(2));
    assert!(m.any_depends_on(2));
    assert!(!m.any_depends_on(0));
}

#[test]
fn fixing_clears_row_and_column() {
    let mut m = DependencyMatrix::new(2);
    m.set_direct(0, 1);
    m.deduce();
    assert!(m.depends_on(0, 1));
    m.on_fixed(1);
    assert!(!m.depends_on(0, 1));
    assert!(!m.depends_on_any(0));
    assert!(!m.any_depends_on(1));
}

#[test]
fn indirect_paths_through_fixed_params_dissolve() {
    // 0 -> 1 -> 2 with no direct 0 -> 2 edge. Fixing 1 removes the only
    // path, so the lazily recomputed closure must drop the indirect entry.
    let mut m = DependencyMatrix::new(3);
    m.set_direct(0, 1);
    m.set_direct(1, 2);
    m.deduce();
    assert!(m.depends_on(0, 2));
    m.on_fixed(1);
    assert!(!m.depends_on(0, 2));
}

#[test]
fn surviving_paths_are_rededuced() {
    // Two paths from 0 to 3; fixing one waypoint leaves the other.
    let mut m = DependencyMatrix::new(4);
    m.set_direct(0, 1);
    m.set_direct(1, 3);
    m.set_direct(0, 2);
    m.set_direct(2, 3);
    m.deduce();
    assert!(m.depends_on(0, 3));
    m.on_fixed(1);
    assert!(m.depends_on(0, 3));
    m.on_fixed(2);
    assert!(!m.depends_on(0, 3));
}

#[test]
fn self_dependency_participates() {
    let mut m = DependencyMatrix::new(2);
    m.set_direct(0, 0);
    m.deduce();
    assert!(m.depends_on(0, 0));
    assert!(m.depends_on_any(0));
    assert!(m.any_depends_on(0));
}
