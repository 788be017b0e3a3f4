//! End-to-end scroll-spy behaviour over measured page layouts.

use folio_core::layout::MeasuredLayout;
use folio_core::scroll_spy::{
    NAV_BAR_BIAS, ScrollSpy, compute_active_section, compute_active_section_with_bias,
};
use folio_protocol::{SectionBounds, SectionId};
use proptest::prelude::*;

fn three_sections() -> MeasuredLayout {
    let mut layout = MeasuredLayout::new();
    layout.set(SectionId::Home, SectionBounds::new(0.0, 800.0));
    layout.set(SectionId::About, SectionBounds::new(800.0, 600.0));
    layout.set(SectionId::Education, SectionBounds::new(1400.0, 500.0));
    layout
}

fn full_page() -> MeasuredLayout {
    MeasuredLayout::stacked(&[
        (SectionId::Home, 900.0),
        (SectionId::About, 700.0),
        (SectionId::Education, 650.0),
        (SectionId::Experience, 1400.0),
        (SectionId::Skills, 600.0),
        (SectionId::Contact, 900.0),
    ])
}

#[test]
fn scrolling_down_through_three_sections() {
    let layout = three_sections();
    let mut spy = ScrollSpy::new();

    assert_eq!(compute_active_section(0.0, &layout), Some(SectionId::Home));
    assert_eq!(spy.on_scroll(0.0, &layout), None);
    assert_eq!(spy.active(), SectionId::Home);

    assert_eq!(spy.on_scroll(750.0, &layout), Some(SectionId::About));
    assert_eq!(spy.on_scroll(1350.0, &layout), Some(SectionId::Education));
    assert_eq!(spy.active(), SectionId::Education);
}

#[test]
fn jump_past_the_last_section_keeps_the_previous_one() {
    let layout = three_sections();

    let mut spy = ScrollSpy::new();
    spy.on_scroll(0.0, &layout);
    assert_eq!(spy.on_scroll(5000.0, &layout), None);
    assert_eq!(spy.active(), SectionId::Home);

    let mut spy = ScrollSpy::new();
    spy.on_scroll(1500.0, &layout);
    assert_eq!(spy.on_scroll(5000.0, &layout), None);
    assert_eq!(spy.active(), SectionId::Education);
}

#[test]
fn offset_above_the_first_section_keeps_the_previous_one() {
    // Content starts below a 300 px banner.
    let mut layout = MeasuredLayout::new();
    layout.set(SectionId::Home, SectionBounds::new(300.0, 800.0));
    layout.set(SectionId::About, SectionBounds::new(1100.0, 600.0));

    assert_eq!(compute_active_section(0.0, &layout), None);

    let mut spy = ScrollSpy::new();
    assert_eq!(spy.on_scroll(0.0, &layout), None);
    assert_eq!(spy.active(), SectionId::Home);

    assert_eq!(spy.on_scroll(1100.0, &layout), Some(SectionId::About));
    assert_eq!(spy.on_scroll(0.0, &layout), None);
    assert_eq!(spy.on_scroll(-250.0, &layout), None);
    assert_eq!(spy.active(), SectionId::About);
}

#[test]
fn walks_every_section_of_a_full_page() {
    let layout = full_page();
    let mut spy = ScrollSpy::new();
    let mut seen = vec![spy.active()];
    let mut offset = 0.0;
    while offset < layout.document_height() {
        if let Some(section) = spy.on_scroll(offset, &layout) {
            seen.push(section);
        }
        offset += 50.0;
    }
    assert_eq!(seen, SectionId::ALL.to_vec());
}

#[test]
fn scrolling_back_up_returns_to_home() {
    let layout = full_page();
    let mut spy = ScrollSpy::new();
    spy.on_scroll(3000.0, &layout);
    assert_eq!(spy.active(), SectionId::Experience);
    assert_eq!(spy.on_scroll(0.0, &layout), Some(SectionId::Home));
}

#[test]
fn unmounted_section_is_skipped_until_measured() {
    let mut layout = full_page();
    layout.clear(SectionId::Skills);
    let skills_offset = 900.0 + 700.0 + 650.0 + 1400.0 + 10.0 - NAV_BAR_BIAS;

    let mut spy = ScrollSpy::new();
    spy.on_scroll(2500.0, &layout);
    assert_eq!(spy.on_scroll(skills_offset, &layout), None);
    assert_eq!(spy.active(), SectionId::Experience);

    layout.set(SectionId::Skills, SectionBounds::new(3650.0, 600.0));
    assert_eq!(spy.on_scroll(skills_offset, &layout), Some(SectionId::Skills));
}

fn arb_layout() -> impl Strategy<Value = (Vec<f64>, MeasuredLayout)> {
    prop::collection::vec(1.0f64..3000.0, 6).prop_map(|heights| {
        let pairs: Vec<_> = SectionId::ALL.into_iter().zip(heights.iter().copied()).collect();
        (heights, MeasuredLayout::stacked(&pairs))
    })
}

proptest! {
    #[test]
    fn offset_inside_a_section_selects_it(
        (heights, layout) in arb_layout(),
        index in 0usize..6,
        fraction in 0.0f64..1.0,
    ) {
        let top: f64 = heights[..index].iter().sum();
        let offset = top + heights[index] * fraction - NAV_BAR_BIAS;
        let position = offset + NAV_BAR_BIAS;
        prop_assume!(position >= top && position < top + heights[index]);
        prop_assert_eq!(compute_active_section(offset, &layout), Some(SectionId::ALL[index]));
    }

    #[test]
    fn section_top_is_inclusive(
        (heights, layout) in arb_layout(),
        index in 0usize..6,
    ) {
        let top: f64 = heights[..index].iter().sum();
        prop_assert_eq!(
            compute_active_section_with_bias(top, 0.0, &layout),
            Some(SectionId::ALL[index])
        );
        if index > 0 {
            // The previous section's bottom is this section's top.
            let prev = compute_active_section_with_bias(top - heights[index - 1] / 2.0, 0.0, &layout);
            prop_assert_eq!(prev, Some(SectionId::ALL[index - 1]));
        }
    }

    #[test]
    fn repeated_scroll_emits_nothing(
        (_heights, layout) in arb_layout(),
        offset in 0.0f64..20_000.0,
    ) {
        let mut spy = ScrollSpy::new();
        let first = spy.on_scroll(offset, &layout);
        let active = spy.active();
        prop_assert_eq!(spy.on_scroll(offset, &layout), None);
        prop_assert_eq!(spy.active(), active);
        prop_assert_eq!(
            compute_active_section(offset, &layout),
            compute_active_section(offset, &layout)
        );
        if let Some(section) = first {
            prop_assert_eq!(section, active);
        }
    }

    #[test]
    fn beyond_the_page_retains_the_active_section(
        (_heights, layout) in arb_layout(),
        start in 0.0f64..20_000.0,
        past in 1.0f64..10_000.0,
    ) {
        let mut spy = ScrollSpy::new();
        spy.on_scroll(start, &layout);
        let before = spy.active();
        let offset = layout.document_height() - NAV_BAR_BIAS + past;
        prop_assert_eq!(spy.on_scroll(offset, &layout), None);
        prop_assert_eq!(spy.active(), before);
    }
}
