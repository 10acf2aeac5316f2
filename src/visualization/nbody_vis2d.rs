use bevy::app::AppExit;
use bevy::log::LogPlugin;
use bevy::prelude::*;

use crate::simulation::scenario::Scenario;
use crate::visualization::{image_path, NullRenderer, BACKGROUND_IMAGE};

#[derive(Component)]
struct BodyIndex(pub usize);

#[derive(Resource)]
struct Viewer {
    scenario: Scenario,
    scale: f32, // screen pixels per meter
    done: bool,
}

const HALF_WIDTH: f32 = 400.0;
const BODY_SIZE: f32 = 32.0;

/// Open a window and advance `scenario` one step per frame. When the run
/// finishes the report is printed and the app exits. An aborted run exits
/// with [`AppExit::Error`].
pub fn run_2d(scenario: Scenario) -> AppExit {
    log::info!("run_2d: starting Bevy 2D viewer with {} bodies", scenario.system.bodies.len());

    let scale = HALF_WIDTH / scenario.radius as f32;
    App::new()
        .insert_resource(Viewer { scenario, scale, done: false })
        .add_plugins(
            DefaultPlugins
                .build()
                // logging is already set up by the binary
                .disable::<LogPlugin>()
                .set(AssetPlugin {
                    file_path: ".".into(),
                    ..Default::default()
                })
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "nbody2d".into(),
                        resolution: (2.0 * HALF_WIDTH, 2.0 * HALF_WIDTH).into(),
                        ..Default::default()
                    }),
                    ..Default::default()
                }),
        )
        .add_systems(Startup, setup_bodies_system)
        .add_systems(Update, (physics_step_system, sync_transforms_system).chain())
        .run()
}

fn setup_bodies_system(mut commands: Commands, viewer: Res<Viewer>, asset_server: Res<AssetServer>) {
    commands.spawn(Camera2dBundle::default());

    commands.spawn(SpriteBundle {
        texture: asset_server.load(BACKGROUND_IMAGE),
        sprite: Sprite {
            custom_size: Some(Vec2::splat(2.0 * HALF_WIDTH)),
            ..Default::default()
        },
        transform: Transform::from_xyz(0.0, 0.0, -1.0),
        ..Default::default()
    });

    for (i, body) in viewer.scenario.system.bodies.iter().enumerate() {
        let p = body.position();
        commands.spawn((
            SpriteBundle {
                texture: asset_server.load(image_path(body.label())),
                sprite: Sprite {
                    custom_size: Some(Vec2::splat(BODY_SIZE)),
                    ..Default::default()
                },
                transform: Transform::from_xyz(p.x as f32 * viewer.scale, p.y as f32 * viewer.scale, 0.0),
                ..Default::default()
            },
            BodyIndex(i),
        ));
    }
}

fn physics_step_system(mut viewer: ResMut<Viewer>, mut exit: EventWriter<AppExit>) {
    if let Some(status) = advance_viewer(&mut viewer) {
        exit.send(status);
    }
}

/// One frame of simulation; `Some` once the app should exit
fn advance_viewer(viewer: &mut Viewer) -> Option<AppExit> {
    if viewer.done {
        return None;
    }
    match viewer.scenario.step(&mut NullRenderer) {
        Ok(true) => None,
        Ok(false) => {
            print!("{}", viewer.scenario.report());
            viewer.done = true;
            Some(AppExit::Success)
        }
        Err(e) => {
            log::error!("simulation aborted: {}", e);
            viewer.done = true;
            Some(AppExit::error())
        }
    }
}

fn sync_transforms_system(viewer: Res<Viewer>, mut query: Query<(&BodyIndex, &mut Transform)>) {
    for (BodyIndex(i), mut transform) in &mut query {
        if let Some(b) = viewer.scenario.system.bodies.get(*i) {
            let p = b.position();
            transform.translation.x = (p.x as f32) * viewer.scale;
            transform.translation.y = (p.y as f32) * viewer.scale;
        }
    }
}
