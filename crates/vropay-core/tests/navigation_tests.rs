// Tests for section jump targets and keyboard section stepping.

use std::cell::RefCell;
use vropay_core::*;

#[derive(Default)]
struct Recorder {
    calls: RefCell<Vec<(f64, bool)>>,
}

impl SmoothScroll for Recorder {
    fn scroll_to(&self, offset: f64, smooth: bool) {
        self.calls.borrow_mut().push((offset, smooth));
    }
}

#[test]
fn every_section_has_a_jump_target() {
    let nav = NavigationDispatcher::default();
    let rec = Recorder::default();
    let expected = [0.0, 400.0, 800.0, 1700.0];
    for (section, want) in SectionId::ALL.into_iter().zip(expected) {
        let got = nav.navigate(section, 2000.0, &rec);
        assert!((got - want).abs() < 1e-3, "{section:?}: {got}");
    }
    let calls = rec.calls.borrow();
    assert_eq!(calls.len(), 4);
    assert!(calls.iter().all(|&(_, smooth)| smooth));
}

#[test]
fn jump_target_lands_in_its_own_section() {
    let nav = NavigationDispatcher::default();
    let table = SectionTable::default();
    for t in nav.targets() {
        assert_eq!(table.classify(t.progress), t.section);
    }
}

#[test]
fn degenerate_extent_scrolls_to_top() {
    let nav = NavigationDispatcher::default();
    let rec = Recorder::default();
    assert_eq!(nav.navigate(SectionId::Financials, 0.0, &rec), 0.0);
    assert_eq!(nav.navigate(SectionId::Financials, -300.0, &rec), 0.0);
    assert_eq!(rec.calls.borrow().len(), 2);
}

#[test]
fn dispatch_works_through_a_trait_object() {
    let nav = NavigationDispatcher::default();
    let rec = Recorder::default();
    let scroller: &dyn SmoothScroll = &rec;
    nav.navigate_to_progress(1.5, 1000.0, scroller);
    assert_eq!(rec.calls.borrow()[0], (1000.0, true));
}

#[test]
fn arrow_and_page_keys_step_between_sections() {
    assert_eq!(
        section_for_key("ArrowDown", SectionId::Hero),
        Some(SectionId::Problem)
    );
    assert_eq!(
        section_for_key("PageDown", SectionId::Financials),
        Some(SectionId::Financials)
    );
    assert_eq!(
        section_for_key("ArrowUp", SectionId::Ecosystem),
        Some(SectionId::Problem)
    );
    assert_eq!(
        section_for_key("PageUp", SectionId::Hero),
        Some(SectionId::Hero)
    );
}

#[test]
fn home_end_and_digits_jump_directly() {
    assert_eq!(
        section_for_key("Home", SectionId::Financials),
        Some(SectionId::Hero)
    );
    assert_eq!(
        section_for_key("End", SectionId::Hero),
        Some(SectionId::Financials)
    );
    for (key, want) in ["1", "2", "3", "4"].into_iter().zip(SectionId::ALL) {
        assert_eq!(section_for_key(key, SectionId::Problem), Some(want));
    }
    assert_eq!(section_for_key("5", SectionId::Hero), None);
    assert_eq!(section_for_key("0", SectionId::Hero), None);
    assert_eq!(section_for_key("a", SectionId::Hero), None);
}
