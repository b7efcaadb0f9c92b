// Tests for the frame animator: per-scene targets, smoothing and idle motion.

use glam::Vec3;
use vropay_core::*;

fn input(theme: &Theme, global: f32, elapsed: f32) -> FrameInput {
    FrameInput {
        snapshot: derive(
            ScrollState {
                global_progress: global,
            },
            &theme.sections,
        ),
        elapsed,
    }
}

fn mounted(theme: &Theme, section: SectionId) -> SceneBuffer {
    let mut graph = SceneBuffer::new();
    graph.mount(&theme.scene(section));
    graph
}

fn find(graph: &SceneBuffer, role: Role) -> (ElementSpec, ElementState) {
    graph
        .iter()
        .find(|(spec, _)| spec.role == role)
        .map(|(spec, state)| (*spec, *state))
        .expect("role mounted")
}

#[test]
fn direct_positioning_lands_on_target_in_one_tick() {
    let theme = Theme::daylight();
    let mut animator = FrameAnimator::new(&theme);
    let mut graph = mounted(&theme, SectionId::Problem);

    // 0.35 is in Problem; the problem window 0.1..0.3 is already complete.
    animator.tick(&input(&theme, 0.35, 0.0), &mut graph);
    let (_, walker) = find(&graph, Role::Walker);
    assert!((walker.position.x - 4.0).abs() < 1e-5);
    let (_, bridge) = find(&graph, Role::Bridge);
    assert_eq!(bridge.opacity, 1.0);
    assert_eq!(bridge.scale, Vec3::ONE);
}

#[test]
fn walker_crosses_and_bobs() {
    let theme = Theme::daylight();
    let mut animator = FrameAnimator::new(&theme);
    let mut graph = mounted(&theme, SectionId::Problem);

    animator.tick(&input(&theme, 0.2, 0.0), &mut graph);
    let (_, walker) = find(&graph, Role::Walker);
    // local 0.5: halfway across, sin(2π) = 0
    assert!(walker.position.x.abs() < 1e-5);
    assert!(walker.position.y.abs() < 1e-5);

    animator.tick(&input(&theme, 0.2125, 0.0), &mut graph);
    let (_, walker) = find(&graph, Role::Walker);
    // local 0.5625: sin(2.25π) ≈ 0.707
    assert!((walker.position.y - 0.1 * 0.70710677).abs() < 1e-4);
}

#[test]
fn smoothing_converges_to_target() {
    let theme = Theme::midnight();
    let mut animator = FrameAnimator::new(&theme);
    let mut graph = mounted(&theme, SectionId::Ecosystem);
    let frame = input(&theme, 0.69, 0.0);

    animator.tick(&frame, &mut graph);
    let (spec, first) = find(&graph, Role::Module(0));
    let local = theme
        .scene(SectionId::Ecosystem)
        .window
        .local_progress(0.69);
    let target = scroll_target(&spec, local, &theme.phases);
    // one tick closes a tenth of the gap
    let expected_first = spec.position + (target.position - spec.position) * 0.1;
    assert!(first.position.distance(expected_first) < 1e-5);

    for _ in 0..200 {
        animator.tick(&frame, &mut graph);
    }
    let (_, settled) = find(&graph, Role::Module(0));
    assert!(settled.position.distance(target.position) < 1e-3);
}

#[test]
fn idle_motion_continues_without_scroll_events() {
    let theme = Theme::daylight();
    let mut animator = FrameAnimator::new(&theme);
    let mut graph = mounted(&theme, SectionId::Hero);

    animator.tick(&input(&theme, 0.0, 0.0), &mut graph);
    let (_, at_rest) = find(&graph, Role::HeroSphere(1));
    animator.tick(&input(&theme, 0.0, 2.0), &mut graph);
    let (_, later) = find(&graph, Role::HeroSphere(1));
    assert!(at_rest.position.distance(later.position) > 1e-4);
    assert!(at_rest.rotation.angle_between(later.rotation) > 1e-4);
    // scroll-driven values did not move
    assert_eq!(at_rest.opacity, later.opacity);
}

#[test]
fn hero_spheres_spread_and_fade() {
    let theme = Theme::daylight();
    let mut animator = FrameAnimator::new(&theme);
    let mut graph = mounted(&theme, SectionId::Hero);

    // hero window is the first tenth of the page
    animator.tick(&input(&theme, 0.1, 0.0), &mut graph);
    let (spec, sphere) = find(&graph, Role::HeroSphere(0));
    assert!((sphere.opacity - 0.7).abs() < 1e-5);
    let lift = spec.float.map(|f| f.sample(0.0).0).unwrap_or(0.0);
    assert!((sphere.position.x + 3.0).abs() < 1e-4);
    assert!((sphere.position.y - lift).abs() < 1e-4);
}

#[test]
fn every_hero_sphere_starts_fully_opaque() {
    for theme in [Theme::daylight(), Theme::midnight()] {
        let mut animator = FrameAnimator::new(&theme);
        let mut graph = mounted(&theme, SectionId::Hero);
        animator.tick(&input(&theme, 0.0, 0.0), &mut graph);
        for axis in 0..3 {
            let (_, sphere) = find(&graph, Role::HeroSphere(axis));
            assert_eq!(sphere.opacity, 1.0, "{} sphere {axis}", theme.name);
        }
        animator.tick(&input(&theme, 0.05, 0.0), &mut graph);
        for axis in 0..3 {
            let (_, sphere) = find(&graph, Role::HeroSphere(axis));
            let expected = 1.0 - 0.3 * theme.windows[0].local_progress(0.05);
            assert!((sphere.opacity - expected).abs() < 1e-5);
        }
    }
}

#[test]
fn bridge_thickens_while_length_stays() {
    let theme = Theme::daylight();
    let mut animator = FrameAnimator::new(&theme);
    let mut graph = mounted(&theme, SectionId::Problem);

    // Problem window 0.1..0.3, so 0.25 is local 0.75 (section is Problem).
    animator.tick(&input(&theme, 0.25, 0.0), &mut graph);
    let (_, bridge) = find(&graph, Role::Bridge);
    assert!((bridge.scale.x - 0.75).abs() < 1e-5);
    assert_eq!(bridge.scale.y, 1.0);
    assert_eq!(bridge.scale.z, 1.0);
    assert!((bridge.opacity - 0.75).abs() < 1e-5);
    assert_eq!(bridge.emissive, 0.5);
}

#[test]
fn modules_follow_their_own_phase() {
    let theme = Theme::daylight();
    let mut animator = FrameAnimator::new(&theme);
    let mut graph = mounted(&theme, SectionId::Ecosystem);

    // ecosystem window 0.3..0.5: global 0.45 -> local 0.75
    animator.tick(&input(&theme, 0.45, 0.0), &mut graph);
    let phases = PhaseScheme::THIRDS.progress(0.75);
    for (i, p) in phases.iter().enumerate() {
        let (_, module) = find(&graph, Role::Module(i as u8));
        let expected_scale = 0.5 + 0.5 * p;
        assert!(
            (module.scale.x - expected_scale).abs() < 1e-5,
            "module {i}: {} vs {expected_scale}",
            module.scale.x
        );
    }
}

#[test]
fn financial_markers_and_curve_reveal() {
    let theme = Theme::daylight();
    let mut animator = FrameAnimator::new(&theme);
    let mut graph = mounted(&theme, SectionId::Financials);

    animator.tick(&input(&theme, 0.85, 0.0), &mut graph);
    let (_, m0) = find(&graph, Role::Marker(0));
    let (_, m1) = find(&graph, Role::Marker(1));
    let (_, m2) = find(&graph, Role::Marker(2));
    assert_eq!((m0.opacity, m1.opacity, m2.opacity), (1.0, 0.0, 0.0));

    let (_, curve) = find(&graph, Role::GrowthCurve);
    let visible = growth_curve_visible(0.5);
    assert!((curve.reveal - (visible - 1) as f32 / 50.0).abs() < 1e-5);

    animator.tick(&input(&theme, 1.0, 0.0), &mut graph);
    let (_, curve) = find(&graph, Role::GrowthCurve);
    assert_eq!(curve.reveal, 1.0);
    let (_, m2) = find(&graph, Role::Marker(2));
    assert_eq!(m2.opacity, 1.0);
}

#[test]
fn elements_of_other_scenes_are_skipped() {
    let theme = Theme::daylight();
    let mut animator = FrameAnimator::new(&theme);
    let mut graph = mounted(&theme, SectionId::Problem);
    let before: Vec<_> = graph.iter().map(|(_, s)| *s).collect();

    // Hero is active but nothing of it is mounted
    animator.tick(&input(&theme, 0.05, 3.0), &mut graph);
    let after: Vec<_> = graph.iter().map(|(_, s)| *s).collect();
    assert_eq!(before, after);
    assert_eq!(animator.active(), Some(SectionId::Hero));
}

struct Partial {
    only: ElementId,
    state: ElementState,
    asked: Vec<ElementId>,
}

impl SceneGraph for Partial {
    fn element_mut(&mut self, id: ElementId) -> Option<&mut ElementState> {
        self.asked.push(id);
        (id == self.only).then_some(&mut self.state)
    }
}

#[test]
fn partially_mounted_scene_updates_what_exists() {
    let theme = Theme::daylight();
    let scene = theme.scene(SectionId::Problem);
    let walker = *scene
        .elements
        .iter()
        .find(|e| e.role == Role::Walker)
        .expect("walker");
    let mut graph = Partial {
        only: walker.id,
        state: ElementState::at_rest(&walker),
        asked: Vec::new(),
    };
    let mut animator = FrameAnimator::new(&theme);
    animator.tick(&input(&theme, 0.3, 0.0), &mut graph);
    assert_eq!(graph.asked.len(), scene.elements.len());
    assert!((graph.state.position.x - 4.0).abs() < 1e-5);
}
