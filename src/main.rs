//! rtsrig demo entry point.
//!
//! Opens a raylib window over a flat ground and runs both controllers:
//!
//! - the camera rig pans with WASD or by pushing the pointer against a screen
//!   edge, and zooms with the mouse wheel;
//! - the character walks to wherever the ground is clicked.
//!
//! # Main Loop
//!
//! 1. Parse the command line, load `config.ini` (defaults if missing)
//! 2. Initialize raylib window and the ECS world
//! 3. Build the scene and register observers and systems
//! 4. Each frame: advance time, poll input, run controllers, render
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --config config.ini
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use clap::Parser;
use std::path::PathBuf;

use rtsrig::events::motion::{log_destination_reached, log_destination_set};
use rtsrig::events::switchdebug::switch_debug_observer;
use rtsrig::game::{self, SceneOptions};
use rtsrig::resources::camera3d::ProjectionMode;
use rtsrig::resources::gameconfig::GameConfig;
use rtsrig::resources::screensize::ScreenSize;
use rtsrig::resources::worldtime::WorldTime;
use rtsrig::systems::cameracontroller::camera_rig_controller;
use rtsrig::systems::clicktomove::{
    add_click_to_move_systems, click_to_move_animation, click_to_move_input,
    initialize_click_to_move,
};
use rtsrig::systems::gameconfig::apply_gameconfig_changes;
use rtsrig::systems::input::update_input_state;
use rtsrig::systems::render::render_system;
use rtsrig::systems::time::update_world_time;

/// Top-down camera rig and click-to-move demo
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Configuration file. A missing file means "use defaults".
    #[arg(long, value_name = "PATH", default_value = "./config.ini")]
    config: PathBuf,

    /// Write the effective configuration to the config path and exit.
    #[arg(long)]
    write_config: bool,

    /// Use a perspective camera regardless of the configuration file.
    #[arg(long)]
    perspective: bool,

    /// Let a navigation agent move the character instead of self-steering.
    #[arg(long)]
    nav_agent: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = GameConfig::with_path(&cli.config);
    if cli.config.exists() {
        if let Err(e) = config.load_from_file() {
            log::error!("{e}");
            std::process::exit(1);
        }
    } else {
        log::warn!(
            "Config file {} not found, using defaults",
            cli.config.display()
        );
    }
    if cli.perspective {
        config.projection = ProjectionMode::Perspective;
    }

    // Early-exit: write the configuration and quit (no window needed)
    if cli.write_config {
        match config.save_to_file() {
            Ok(()) => println!("Config written to {}", config.path().display()),
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        }
        return;
    }

    // --------------- Raylib window ---------------
    let (mut rl, thread) = raylib::init()
        .size(config.window_width as i32, config.window_height as i32)
        .resizable()
        .title("rtsrig")
        .build();
    rl.set_target_fps(config.target_fps);
    // Disable ESC to exit
    rl.set_exit_key(None);

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    world.insert_resource(WorldTime::default());
    world.insert_resource(ScreenSize {
        w: rl.get_screen_width(),
        h: rl.get_screen_height(),
    });
    game::setup(
        &mut world,
        &config,
        SceneOptions {
            use_nav_agent: cli.nav_agent,
        },
    );
    world.insert_resource(config);
    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);

    world.spawn(Observer::new(switch_debug_observer));
    world.spawn(Observer::new(log_destination_set));
    world.spawn(Observer::new(log_destination_reached));
    // Ensure the observers are registered before we run any systems that may trigger events.
    world.flush();

    let mut update = Schedule::default();
    update.add_systems(apply_gameconfig_changes.before(update_input_state));
    update.add_systems(update_input_state.before(initialize_click_to_move));
    // Clicks are picked against the view the player saw, before this frame's pan.
    update.add_systems(camera_rig_controller.after(click_to_move_input));
    add_click_to_move_systems(&mut update);
    update.add_systems(
        render_system
            .after(camera_rig_controller)
            .after(click_to_move_animation),
    );

    update
        .initialize(&mut world)
        .expect("Failed to initialize schedule");

    // --------------- Main loop ---------------
    while !world
        .non_send_resource::<raylib::RaylibHandle>()
        .window_should_close()
    {
        let (dt, w, h) = {
            let rl = world.non_send_resource::<raylib::RaylibHandle>();
            (rl.get_frame_time(), rl.get_screen_width(), rl.get_screen_height())
        };
        update_world_time(&mut world, dt);
        {
            // Window may have been resized
            let mut screen = world.resource_mut::<ScreenSize>();
            screen.w = w;
            screen.h = h;
        }

        update.run(&mut world);

        world.clear_trackers(); // Clear changed components for next frame
    }
}
