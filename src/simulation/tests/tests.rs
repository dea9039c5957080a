use super::*;
use crate::domain::ShapeKind;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-3
}

fn triangle_at(x: f32, y: f32) -> Vec<Vec2> {
    vec![Vec2::new(x, y), Vec2::new(x + 30.0, y), Vec2::new(x + 15.0, y + 30.0)]
}

fn owned_polygon(world: &mut PhysicsWorld, owner: OwnerId, x: f32, y: f32) -> BodyId {
    let (body, verts) = RigidBody::polygon_from_points(&triangle_at(x, y)).expect("points");
    world.add_owned(owner, body, Some(verts))
}

#[test]
fn rectangle_hitting_min_edge_bounces() {
    let mut world = PhysicsWorld::new();
    world.set_world_bounds(WorldBounds::new(0.0, 0.0, 1000.0, 1000.0));
    let id = world.add_body(
        RigidBody::player(Vec2::zero(), 40.0, 10.0).with_velocity(Vec2::new(400.0, 0.0)),
        None,
    );

    world.step();

    let body = world.body(id).expect("body");
    assert!(body.pos.x <= 980.0);
    assert!(body.velocity.x < 0.0);
    assert!(approx_eq(body.velocity.x, -266.0));
}

#[test]
fn drag_never_increases_speed_and_ends_at_rest() {
    let mut world = PhysicsWorld::new();
    let id = world.add_body(
        RigidBody::circle(800.0, 600.0, 5.0)
            .with_mass(1.0)
            .with_velocity(Vec2::new(3.0, -2.0)),
        None,
    );

    let mut last = Vec2::new(3.0, -2.0).length();
    for _ in 0..200 {
        world.step();
        let speed = world.body(id).map(|b| b.velocity.length()).expect("body");
        assert!(speed <= last);
        last = speed;
    }
    assert_eq!(world.body(id).map(|b| b.velocity), Some(Vec2::zero()));
}

#[test]
fn in_bounds_body_only_sees_drag() {
    let mut world = PhysicsWorld::new();
    let v = Vec2::new(60.0, -30.0);
    let id = world.add_body(RigidBody::rect(800.0, 600.0, 40.0, 40.0).with_mass(5.0).with_velocity(v), None);
    assert!(world.world_bounds().contains_box(800.0, 600.0, 20.0, 20.0));

    world.step();

    let body = world.body(id).expect("body");
    let expected = v * world.settings().drag;
    assert!(approx_eq(body.velocity.x, expected.x));
    assert!(approx_eq(body.velocity.y, expected.y));
}

#[test]
fn remove_owned_clears_every_trace() {
    let mut world = PhysicsWorld::new();
    let owner = OwnerId(17);
    let a = owned_polygon(&mut world, owner, 100.0, 100.0);
    let b = world.add_owned(owner, RigidBody::circle(300.0, 300.0, 12.0), None);
    let keep = owned_polygon(&mut world, OwnerId(18), 500.0, 500.0);

    assert_eq!(world.owned_by(owner), &[a, b]);
    assert_eq!(world.registry_len(), 2);

    assert_eq!(world.remove_owned(owner), 2);

    for id in [a, b] {
        assert!(world.body(id).is_none());
        assert_eq!(world.polygon_vertex_count(id), 0);
        assert_eq!(world.owner_of(id), None);
    }
    assert!(world.owned_by(owner).is_empty());
    assert_eq!(world.owner_of(keep), Some(OwnerId(18)));
    assert_eq!(world.registry_len(), 1);
    assert!(world.ownership().is_consistent());

    assert_eq!(world.remove_owned(owner), 0);
}

#[test]
fn player_bodies_are_replaced_and_cleaned_up() {
    let mut world = PhysicsWorld::new();
    let first = world.spawn_player("alice", Vec2::new(100.0, 100.0));
    let second = world.spawn_player("alice", Vec2::new(200.0, 100.0));

    assert_ne!(first, second);
    assert!(world.body(first).is_none());
    assert_eq!(world.player_body("alice"), Some(second));
    assert_eq!(world.body_count(), 1);

    assert!(world.remove_player_body("alice"));
    assert!(!world.remove_player_body("alice"));
    assert_eq!(world.body_count(), 0);
    assert_eq!(world.player_count(), 0);
}

#[test]
fn player_velocity_is_clamped_and_respawn_stops() {
    let mut world = PhysicsWorld::new();
    let id = world.spawn_player("p1", Vec2::new(400.0, 400.0));

    assert!(world.set_player_velocity("p1", Vec2::new(600.0, 800.0)));
    let v = world.body(id).map(|b| b.velocity).expect("body");
    assert!(approx_eq(v.length(), 300.0));
    assert!(approx_eq(v.x, 180.0) && approx_eq(v.y, 240.0));

    assert!(world.set_player_velocity("p1", Vec2::new(10.0, 0.0)));
    assert_eq!(world.body(id).map(|b| b.velocity), Some(Vec2::new(10.0, 0.0)));

    assert!(world.respawn_player("p1", Vec2::new(50.0, 60.0)));
    let body = world.body(id).expect("body");
    assert_eq!(body.pos, Vec2::new(50.0, 60.0));
    assert_eq!(body.velocity, Vec2::zero());

    assert!(!world.set_player_velocity("ghost", Vec2::new(1.0, 0.0)));
    assert!(!world.respawn_player("ghost", Vec2::zero()));
}

#[test]
fn moving_polygon_stays_centered_during_steps() {
    let mut world = PhysicsWorld::new();
    let (body, verts) = RigidBody::polygon_from_points(&triangle_at(300.0, 300.0)).expect("points");
    let id = world.add_body(body.with_mass(3.0).with_velocity(Vec2::new(90.0, 45.0)), Some(verts));

    for _ in 0..10 {
        world.step();
        let pos = world.body(id).map(|b| b.pos).expect("body");
        let c = Vec2::centroid(world.polygon_vertices(id).expect("entry"));
        assert!(approx_eq(c.x, pos.x) && approx_eq(c.y, pos.y));
    }
}

#[test]
fn stale_registry_entries_are_swept_on_interval() {
    let mut settings = PhysicsSettings::default();
    settings.registry_sweep_interval = 5;
    let mut world = PhysicsWorld::with_settings(settings);

    let id = owned_polygon(&mut world, OwnerId(1), 100.0, 100.0);
    // Simulate a body that left the canonical list behind the registry's back.
    world.bodies.remove_body(id);
    assert_eq!(world.registry_len(), 1);

    for _ in 0..4 {
        world.step();
    }
    assert_eq!(world.registry_len(), 1);
    world.step();
    assert_eq!(world.tick(), 5);
    assert_eq!(world.registry_len(), 0);
}

#[test]
fn perf_stats_track_the_last_step() {
    let mut world = PhysicsWorld::new();
    world.add_static(RigidBody::rect(400.0, 400.0, 100.0, 20.0), None);
    world.add_body(
        RigidBody::circle(400.0, 385.0, 10.0)
            .with_mass(1.0)
            .with_velocity(Vec2::new(0.0, 30.0)),
        None,
    );

    world.step();
    assert_eq!(world.get_perf_stats(), PerfStats::default());

    world.enable_perf_metrics(true);
    world.step();
    let stats = world.get_perf_stats();
    assert_eq!(stats.bodies(), 2);
    assert_eq!(stats.movable_bodies(), 1);
    assert_eq!(stats.pairs_tested(), 1);
    assert!(stats.step_ms() >= 0.0);
    assert!(stats.to_json().contains("\"pairsTested\":1"));
}

#[test]
fn snapshots_restore_statics_with_vertices() {
    let mut world = PhysicsWorld::new();
    let (body, verts) = RigidBody::polygon_from_points(&triangle_at(10.0, 10.0)).expect("points");
    world.add_static(body, Some(verts));
    world.add_static(RigidBody::circle(50.0, 50.0, 5.0), None);
    world.spawn_player("p", Vec2::new(500.0, 500.0));

    let snaps = world.snapshots();
    assert_eq!(snaps.len(), 3);
    assert_eq!(snaps[0].shape, ShapeKind::Polygon);
    assert_eq!(snaps[0].vertices.len(), 3);

    let mut fresh = PhysicsWorld::new();
    assert_eq!(fresh.restore_statics(&snaps), 2);
    assert_eq!(fresh.body_count(), 2);
    assert_eq!(fresh.registry_len(), 1);
    let poly = fresh.bodies()[0].id;
    assert_eq!(fresh.polygon_vertex_count(poly), 3);
}

#[test]
fn clear_resets_state_but_not_ids() {
    let mut world = PhysicsWorld::new();
    let first = owned_polygon(&mut world, OwnerId(4), 0.0, 0.0);
    world.spawn_player("x", Vec2::new(100.0, 100.0));
    world.step();

    world.clear();
    assert_eq!(world.body_count(), 0);
    assert_eq!(world.registry_len(), 0);
    assert_eq!(world.player_count(), 0);
    assert!(world.ownership().is_empty());
    assert_eq!(world.tick(), 0);

    let next = world.add_static(RigidBody::rect(0.0, 0.0, 1.0, 1.0), None);
    assert!(next.0 > first.0);
}

#[test]
fn vertices_on_non_polygon_are_ignored() {
    let mut world = PhysicsWorld::new();
    let id = world.add_static(RigidBody::rect(10.0, 10.0, 5.0, 5.0), Some(triangle_at(0.0, 0.0)));
    assert_eq!(world.polygon_vertex_count(id), 0);
    assert_eq!(world.registry_len(), 0);
}

#[test]
fn settings_json_configures_the_world() {
    let world = PhysicsWorld::from_settings_json(
        r#"{"maxPlayerSpeed":120,"worldBounds":{"minX":-50,"minY":-50,"maxX":50,"maxY":50}}"#,
    )
    .expect("settings");
    assert_eq!(world.world_bounds().min_x, -50.0);
    assert_eq!(world.settings().max_player_speed, 120.0);
    assert!(PhysicsWorld::from_settings_json(r#"{"dt":-1}"#).is_err());
}

#[test]
fn removing_a_player_body_by_id_frees_the_participant() {
    let mut world = PhysicsWorld::new();
    let id = world.spawn_player("bob", Vec2::new(300.0, 300.0));
    world.spawn_player("carol", Vec2::new(500.0, 300.0));

    assert!(world.remove_body(id));
    assert_eq!(world.player_body("bob"), None);
    assert_eq!(world.player_count(), 1);
    assert!(!world.set_player_velocity("bob", Vec2::new(1.0, 0.0)));
    assert!(world.bodies.is_consistent());
}

#[test]
fn static_colliders_are_forced_immovable() {
    let mut world = PhysicsWorld::new();
    let wall = world.add_static(RigidBody::rect(100.0, 100.0, 10.0, 10.0).with_mass(4.0), None);
    let crate_id = world.add_body(RigidBody::rect(300.0, 100.0, 10.0, 10.0).with_mass(4.0), None);

    assert!(!world.body(wall).expect("wall").movable);
    assert!(world.body(crate_id).expect("crate").movable);
    assert_eq!(world.owner_of(crate_id), None);
}

#[test]
fn polygon_shape_is_refitted_to_registered_vertices() {
    let mut world = PhysicsWorld::new();
    let pts = triangle_at(200.0, 200.0);
    let (body, verts) = RigidBody::polygon_from_points(&pts).expect("points");
    // Caller-supplied box is wrong; insertion fits it to the vertices.
    let mut body = body;
    body.shape = crate::domain::Shape::Polygon { width: 1.0, height: 1.0, offset: Vec2::zero() };
    let id = world.add_body(body, Some(verts));

    let body = world.body(id).expect("body");
    assert_eq!(body.half_extents(), (15.0, 15.0));
    let c = body.bbox_center();
    assert!(approx_eq(c.x, 215.0) && approx_eq(c.y, 215.0));
}

#[test]
fn removing_owned_colliders_touches_only_the_owner() {
    let mut world = PhysicsWorld::new();
    for i in 0..500 {
        world.add_owned(OwnerId(1), RigidBody::circle(i as f32, 10.0, 1.0), None);
    }
    let a = world.add_owned(OwnerId(2), RigidBody::circle(5.0, 500.0, 2.0), None);
    let b = world.add_owned(OwnerId(2), RigidBody::circle(9.0, 500.0, 2.0), None);

    assert_eq!(world.remove_owned(OwnerId(2)), 2);
    assert!(world.body(a).is_none() && world.body(b).is_none());
    assert_eq!(world.body_count(), 500);
    assert!(world.bodies.is_consistent());
    assert!(world.ownership().is_consistent());
}
