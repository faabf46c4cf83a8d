use flow_core::{EngineEvent, EngineSimulation, FlowSeries, SAFETY_CEILING};
use std::cell::RefCell;
use std::rc::Rc;

#[test]
fn live_flow_at_3000_rpm_stays_inside_jitter_band() {
    let mut sim = EngineSimulation::generate(Some(2024));
    let base = sim.flow_at(3000.0, FlowSeries::Current);
    assert!(base > 0.0);

    for _ in 0..100 {
        // Step off and back so each set is a real update.
        sim.set_current_rpm(0.0);
        sim.set_current_rpm(3000.0);
        let flow = sim.current_fuel_flow();
        assert!(
            (base * 0.85..=base * 1.15).contains(&flow),
            "flow {flow} outside +/-15% of {base}"
        );
    }
}

#[test]
fn notifications_follow_property_changes() {
    let mut sim = EngineSimulation::generate(Some(99));
    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&events);
    sim.subscribe(move |event: &EngineEvent| sink.borrow_mut().push(*event));

    sim.set_current_rpm(4200.0);
    let first = events.borrow().clone();
    assert_eq!(first[0], EngineEvent::RpmChanged(4200.0));
    assert!(first
        .iter()
        .any(|e| matches!(e, EngineEvent::FuelFlowChanged(f) if *f == sim.current_fuel_flow())));

    sim.set_current_rpm(4200.0);
    assert_eq!(events.borrow().len(), first.len());
}

#[test]
fn table_is_exposed_read_only_and_bounded() {
    let sim = EngineSimulation::generate(Some(5));
    let table = sim.table();
    assert_eq!(table.len(), 121);
    assert!(table
        .iter()
        .all(|s| s.min_flow >= 0.0 && s.max_flow <= SAFETY_CEILING && s.min_flow <= s.max_flow));
    assert_eq!(sim.bounds().max_rpm, 6000.0);
    assert_eq!(sim.bounds().max_fuel_flow, 50.0);
}
