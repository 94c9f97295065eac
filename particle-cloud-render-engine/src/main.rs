use bevy::asset::AssetMetaCheck;
use bevy::asset::LoadState;
use bevy::diagnostic::FrameTimeDiagnosticsPlugin;
use bevy::prelude::*;
use bevy::window::PresentMode;
use bevy_common_assets::json::JsonAssetPlugin;

mod engine;
mod rpc;

use constants::cloud::MAX_CLOUD_POINTS;
use constants::palette::PALETTE;
use constants::render_settings::{CAMERA_FOV_DEGREES, CAMERA_ORBIT_RADIUS};
use particle_cloud::MorphEngine;

use engine::assets::scene_presets::ScenePresets;
use engine::camera::orbit_camera::{OrbitCamera, camera_controller};
use engine::cloud::{CloudAssets, CloudState, spawn_cloud_when_ready};
use engine::core::app_state::{AppState, FpsText, StatusText, transition_to_running};
use engine::motion::sensor::MotionSensor;
use engine::motion::synthetic_feed::SyntheticFeed;
#[cfg(not(target_arch = "wasm32"))]
use engine::motion::synthetic_feed::drive_synthetic_feed;
use engine::shaders::ParticleCloudShader;
use engine::systems::cloud_update::{cloud_advance_system, disturbance_notification_system};
use engine::systems::fps_tracking::{
    fps_notification_system, fps_text_update_system, status_text_update_system,
};
use engine::systems::interaction_input::{keyboard_input_system, pointer_tracking_system};
use rpc::web_rpc::WebRpcPlugin;

const PRESETS_PATH: &'static str = "config/scene_presets.json";

#[derive(Resource, Default)]
struct PresetLoader {
    handle: Option<Handle<ScenePresets>>,
    applied: bool,
}

fn main() {
    let mut app = create_app();

    #[cfg(target_arch = "wasm32")]
    {
        wasm_bindgen_futures::spawn_local(async move {
            app.run();
        });
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        app.run();
    }
}

/// Create application with the particle cloud pipeline
fn create_app() -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .add_plugins(MaterialPlugin::<ParticleCloudShader>::default())
        .add_plugins(FrameTimeDiagnosticsPlugin::default())
        .add_plugins(JsonAssetPlugin::<ScenePresets>::new(&["json"]))
        .add_plugins(WebRpcPlugin);

    app.init_state::<AppState>()
        .init_resource::<PresetLoader>()
        .init_resource::<CloudState>()
        .init_resource::<CloudAssets>()
        .init_resource::<MotionSensor>()
        .init_resource::<SyntheticFeed>()
        .insert_resource(ClearColor(Color::BLACK))
        .add_systems(Startup, setup)
        .add_systems(
            Update,
            (
                load_presets_system,
                spawn_cloud_when_ready,
                transition_to_running,
            )
                .chain()
                .run_if(in_state(AppState::Loading)),
        )
        .add_systems(
            Update,
            (
                pointer_tracking_system,
                keyboard_input_system,
                cloud_advance_system,
                camera_controller,
                fps_text_update_system,
                status_text_update_system,
                fps_notification_system,
                disturbance_notification_system,
            )
                .run_if(in_state(AppState::Running)),
        );

    #[cfg(not(target_arch = "wasm32"))]
    app.add_systems(
        Update,
        drive_synthetic_feed.run_if(in_state(AppState::Running)),
    );

    app
}

/// Load the presets JSON and fold it into the cloud state
fn load_presets_system(
    mut preset_loader: ResMut<PresetLoader>,
    mut state: ResMut<CloudState>,
    mut assets: ResMut<CloudAssets>,
    asset_server: Res<AssetServer>,
    preset_assets: Res<Assets<ScenePresets>>,
) {
    // Start loading if not already started
    if preset_loader.handle.is_none() {
        println!("Loading scene presets from: {}", PRESETS_PATH);
        preset_loader.handle = Some(asset_server.load(PRESETS_PATH));
        return;
    }

    if preset_loader.applied {
        return;
    }

    let Some(ref handle) = preset_loader.handle else {
        return;
    };

    if let Some(presets) = preset_assets.get(handle) {
        println!("Successfully loaded scene presets");
        apply_presets(presets, &mut state);
        preset_loader.applied = true;
        assets.presets_applied = true;
        return;
    }

    // A missing or unreadable file falls back to the built-in defaults.
    if let Some(LoadState::Failed(_)) = asset_server.get_load_state(handle.id()) {
        warn!("Scene presets unavailable, starting with defaults");
        preset_loader.applied = true;
        assets.presets_applied = true;
    }
}

fn apply_presets(presets: &ScenePresets, state: &mut CloudState) {
    let mut count = presets.point_count;
    if count == 0 || count > MAX_CLOUD_POINTS {
        warn!("Preset point count {count} outside 1..={MAX_CLOUD_POINTS}, clamping");
        count = count.clamp(1, MAX_CLOUD_POINTS);
    }

    match presets.seed {
        Some(seed) => match MorphEngine::new_seeded(presets.shape, count, seed) {
            Ok(engine) => state.engine = engine,
            Err(error) => warn!("Seeded preset rejected: {error}"),
        },
        None => {
            if let Err(error) = state.engine.set_count(count) {
                warn!("Preset point count rejected: {error}");
            }
            if state.engine.kind() != presets.shape {
                if let Err(error) = state.engine.retarget(presets.shape) {
                    warn!("Preset shape rejected: {error}");
                }
            }
        }
    }

    state.colour_index = presets.colour_index % PALETTE.len();
    state.mode = presets.mode;

    println!(
        "Scene presets: {} | {} points | {} mode",
        state.engine.kind().label(),
        state.engine.count(),
        state.mode.label()
    );
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    DefaultPlugins.set(window_config).set(asset_config)
}

fn create_window_config() -> Window {
    #[cfg(target_arch = "wasm32")]
    {
        Window {
            canvas: Some("#bevy".into()),
            fit_canvas_to_parent: true,
            prevent_default_event_handling: false,
            present_mode: PresentMode::AutoVsync,
            ..default()
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        Window {
            present_mode: PresentMode::AutoVsync,
            ..default()
        }
    }
}

/// Setup camera and UI overlays
fn setup(mut commands: Commands) {
    println!("=== PROCEDURAL PARTICLE CLOUD ===");
    println!("Controls: 1-5 shapes | C colour | M input mode | R reshuffle | drag to orbit");

    spawn_camera(&mut commands);
    spawn_ui(&mut commands);
}

fn spawn_camera(commands: &mut Commands) {
    commands.spawn((
        Camera3d::default(),
        Projection::from(PerspectiveProjection {
            fov: CAMERA_FOV_DEGREES.to_radians(),
            ..default()
        }),
        Transform::from_xyz(0.0, 0.0, CAMERA_ORBIT_RADIUS).looking_at(Vec3::ZERO, Vec3::Y),
    ));
    commands.insert_resource(OrbitCamera::default());
}

fn spawn_ui(commands: &mut Commands) {
    commands
        .spawn(Node {
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            ..default()
        })
        .with_children(|parent| {
            parent.spawn((
                Text::new("FPS: "),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(Color::srgb(1., 0., 0.)),
                Node {
                    position_type: PositionType::Absolute,
                    bottom: Val::Px(12.0),
                    right: Val::Px(12.0),
                    ..default()
                },
                FpsText,
            ));

            parent.spawn((
                Text::new(""),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(Color::srgb(0.85, 0.85, 0.85)),
                Node {
                    position_type: PositionType::Absolute,
                    top: Val::Px(12.0),
                    left: Val::Px(12.0),
                    ..default()
                },
                StatusText,
            ));
        });
}
