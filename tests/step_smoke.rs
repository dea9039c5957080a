use realm_physics::{OwnerId, PhysicsWorld, RigidBody, Vec2, WorldBounds};

fn init_logs() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-3
}

#[test]
fn perf_smoke_step() {
    init_logs();
    let mut world = PhysicsWorld::new();
    world.enable_perf_metrics(true);

    // Border walls plus a grid of crates drifting around.
    world.add_static(RigidBody::rect(800.0, 10.0, 1600.0, 20.0), None);
    world.add_static(RigidBody::rect(800.0, 1190.0, 1600.0, 20.0), None);
    for i in 0..10 {
        for j in 0..6 {
            let body = RigidBody::rect(100.0 + i as f32 * 120.0, 150.0 + j as f32 * 150.0, 30.0, 30.0)
                .with_mass(2.0)
                .with_velocity(Vec2::new(40.0 * (j as f32 - 2.5), 25.0 * (i as f32 - 4.5)));
            world.add_body(body, None);
        }
    }

    for _ in 0..120 {
        world.step();
    }

    let stats = world.get_perf_stats();
    assert!(stats.step_ms() >= 0.0);
    assert_eq!(stats.bodies(), 62);
    assert_eq!(stats.movable_bodies(), 60);
    assert!(stats.pairs_tested() > 0);

    let bounds = world.world_bounds();
    for body in world.bodies() {
        let (hw, _) = body.half_extents();
        assert!(body.pos.x.is_finite() && body.pos.y.is_finite());
        if body.movable {
            assert!(body.pos.x - hw >= bounds.min_x - 1e-3);
            assert!(body.pos.x + hw <= bounds.max_x + 1e-3);
        }
    }
}

#[test]
fn box_inside_triangle_corner_is_pushed_out() {
    init_logs();
    let mut world = PhysicsWorld::new();
    world.enable_perf_metrics(true);
    let pts = [Vec2::new(100.0, 100.0), Vec2::new(140.0, 100.0), Vec2::new(100.0, 140.0)];
    let (tri, verts) = RigidBody::polygon_from_points(&pts).expect("points");
    world.add_static(tri, Some(verts));
    // Overlaps the triangle only near its acute corner at (140, 100).
    let crate_id = world.add_body(RigidBody::rect(137.0, 101.0, 4.0, 4.0).with_mass(1.0), None);

    world.step();

    let stats = world.get_perf_stats();
    assert_eq!(stats.broad_phase_hits(), 1);
    assert_eq!(stats.collisions(), 1);
    let body = world.body(crate_id).expect("crate");
    assert_ne!(body.pos, Vec2::new(137.0, 101.0));
    assert_eq!(body.velocity, Vec2::zero());
}

#[test]
fn two_circles_meet_and_separate() {
    init_logs();
    let mut world = PhysicsWorld::new();
    let a = world.add_body(
        RigidBody::circle(400.0, 300.0, 10.0)
            .with_mass(1.0)
            .with_velocity(Vec2::new(120.0, 0.0)),
        None,
    );
    let b = world.add_body(
        RigidBody::circle(440.0, 300.0, 10.0)
            .with_mass(1.0)
            .with_velocity(Vec2::new(-120.0, 0.0)),
        None,
    );

    let mut bounced = false;
    for _ in 0..30 {
        world.step();
        let va = world.body(a).map(|body| body.velocity.x).unwrap_or_default();
        let vb = world.body(b).map(|body| body.velocity.x).unwrap_or_default();
        if va < 0.0 && vb > 0.0 {
            bounced = true;
            break;
        }
    }
    assert!(bounced);

    let pa = world.body(a).map(|body| body.pos).unwrap_or_default();
    let pb = world.body(b).map(|body| body.pos).unwrap_or_default();
    assert!((pb - pa).length() >= 20.0 - 1e-3);
    // Momentum is conserved by the impulse (equal masses, drag applied to both).
    let va = world.body(a).map(|body| body.velocity.x).unwrap_or_default();
    let vb = world.body(b).map(|body| body.velocity.x).unwrap_or_default();
    assert!(approx_eq(va, -vb));
}

#[test]
fn movable_box_stops_dead_against_wall() {
    init_logs();
    let mut world = PhysicsWorld::new();
    world.set_world_bounds(WorldBounds::new(0.0, 0.0, 1000.0, 1000.0));
    world.add_static(RigidBody::rect(500.0, 500.0, 20.0, 200.0), None);
    let mover = world.add_body(
        RigidBody::rect(470.0, 500.0, 20.0, 20.0)
            .with_mass(10.0)
            .with_velocity(Vec2::new(900.0, 0.0)),
        None,
    );

    world.step();

    let body = world.body(mover).expect("mover");
    assert_eq!(body.velocity, Vec2::zero());
    // Integrated 5 units into the wall, pushed back out by the full overlap.
    assert!(approx_eq(body.pos.x, 480.0));
}

#[test]
fn scripted_owner_lifecycle() {
    init_logs();
    let mut world = PhysicsWorld::new();
    let owner = OwnerId(900);
    let pts = [Vec2::new(600.0, 600.0), Vec2::new(660.0, 600.0), Vec2::new(630.0, 650.0)];
    let (body, verts) = RigidBody::polygon_from_points(&pts).expect("points");
    let poly = world.add_owned(owner, body, Some(verts));
    world.add_owned(owner, RigidBody::rect(700.0, 700.0, 10.0, 10.0), None);

    for _ in 0..3 {
        world.step();
    }
    assert_eq!(world.polygon_vertex_count(poly), 3);
    assert_eq!(world.remove_owned(owner), 2);
    assert_eq!(world.body_count(), 0);
    assert_eq!(world.registry_len(), 0);
}
