// Scroll choreography and page-chrome animators exercised end to end.

use backdrop_core::*;

#[test]
fn halfway_scroll_reveals_car_and_most_of_the_hud() {
    let c = Choreography::showcase();
    let p = section_progress(-1000.0, 3000.0, 1000.0);
    assert!((p - 0.5).abs() < 1e-6);

    let styles = c.evaluate(p);
    let car = styles
        .iter()
        .find(|(t, _)| *t == Target::Id("showcase-car"))
        .map(|(_, s)| *s)
        .unwrap();
    assert_eq!(car.opacity, Some(1.0));

    let hud = styles
        .iter()
        .find(|(t, _)| *t == Target::Class("shud-top-left"))
        .map(|(_, s)| *s)
        .unwrap();
    let eased = hud.opacity.unwrap();
    assert!((eased - 0.963).abs() < 1e-3);
    assert!((hud.translate_x.unwrap() - (-20.0 * (1.0 - eased))).abs() < 1e-4);
}

#[test]
fn every_target_appears_once() {
    let styles = Choreography::showcase().evaluate(0.7);
    let mut targets: Vec<Target> = styles.iter().map(|(t, _)| *t).collect();
    let n = targets.len();
    targets.dedup();
    assert_eq!(targets.len(), n);
    assert_eq!(n, 7);
}

#[test]
fn sweeping_back_and_forth_is_stateless() {
    let c = Choreography::showcase();
    let reference: Vec<_> = (0..=50).map(|i| c.evaluate(i as f32 / 50.0)).collect();
    for i in (0..=50).rev() {
        assert_eq!(c.evaluate(i as f32 / 50.0), reference[i]);
    }
}

#[test]
fn opacities_stay_in_unit_range() {
    let c = Choreography::showcase();
    for i in 0..=100 {
        for (_, s) in c.evaluate(i as f32 / 100.0) {
            if let Some(o) = s.opacity {
                assert!((0.0..=1.0).contains(&o));
            }
        }
    }
}

#[test]
fn loader_then_words_then_counters() {
    let mut loader = Loader::new(0.0);
    let mut words = WordReveal::default();
    let mut counter = CountUp::new(98_500);
    let mut now = 0.0;
    while loader.stage() != LoaderStage::Dismissed {
        now += 16.0;
        if loader.tick(now) {
            words.trigger(now);
        }
    }
    assert_eq!(words.visible_count(5, now), 0);
    assert_eq!(words.visible_count(5, now + word_reveal_delay_ms(4)), 5);

    counter.observe(visible_fraction(100.0, 200.0, 800.0), now);
    assert!(counter.is_started());
    let done = now + 2500.0;
    assert_eq!(group_thousands(counter.value(done).unwrap()), "98,500");
}
