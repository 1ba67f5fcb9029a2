// src/main.rs
use log::{debug, error, info, warn};
use nannou::prelude::*;
use std::error::Error;

use spritevis::{
    animation::AnimationController,
    config::Config,
    controllers::{OscCommand, OscController, OscSender, PageControls},
    models::Scene,
    render::CanvasRenderer,
    services::Spawner,
    views::Canvas,
};

struct Model {
    // Core components:
    scene: Scene,
    canvas: Canvas,
    controller: AnimationController,
    controls: PageControls,
    spawner: Spawner,

    // Comms components:
    osc_controller: OscController,
    osc_sender: OscSender,

    // Rendering components:
    renderer: CanvasRenderer,
    random: rand::rngs::ThreadRng,

    // Message
    debug_flag: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    nannou::app(model).update(update).run();
}

fn model(app: &App) -> Model {
    match build_model(app) {
        Ok(model) => model,
        Err(e) => {
            error!("Failed to start: {}", e);
            std::process::exit(1);
        }
    }
}

fn build_model(app: &App) -> Result<Model, Box<dyn Error>> {
    // Load config
    let config = Config::load()?;

    // Load scene & build the canvas
    let scene_path = config.resolve_scene_path();
    let scene = Scene::load(&scene_path)
        .map_err(|e| format!("Failed to load scene {}: {}", scene_path.display(), e))?;
    let canvas = Canvas::from_scene(&scene)?;

    let mut controller = AnimationController::from_config(&config.animation);
    let adopted = controller.adopt_scene(&canvas, &scene)?;
    info!(
        "Loaded {} sprites ({} animated) from {}",
        canvas.len(),
        adopted,
        scene_path.display()
    );

    let spawner = Spawner::new(config.spawner.clone());
    if spawner.is_enabled() {
        info!("Spawning a sprite every {}s while playing", config.spawner.interval);
    }

    // Create OSC controller
    let osc_controller = OscController::new(config.osc.rx_port)?;
    let osc_sender = OscSender::new(config.osc.rx_port)?;

    // Create window
    app.new_window()
        .title("spritevis")
        .size(config.window.width, config.window.height)
        .view(view)
        .key_pressed(key_pressed)
        .build()
        .map_err(|e| format!("Failed to build window: {:?}", e))?;

    Ok(Model {
        scene,
        canvas,
        controller,
        controls: PageControls::new(),
        spawner,

        osc_controller,
        osc_sender,

        renderer: CanvasRenderer::new(&config.style),
        random: rand::thread_rng(),

        debug_flag: false,
    })
}

// Keys go through OSC so local and remote control take the same path
fn key_pressed(_app: &App, model: &mut Model, key: Key) {
    match key {
        Key::Space | Key::S => model.osc_sender.send_start(),
        Key::P => model.osc_sender.send_pause(),
        Key::M => model.osc_sender.send_mute(),
        Key::N => model.osc_sender.send_spawn(1),

        /***************** Below functions aren't implemented in OSC ****************** */
        Key::D => {
            model.debug_flag = !model.debug_flag;
            if model.debug_flag {
                for sprite in model.canvas.sprites() {
                    info!("{}: {}", sprite.id, sprite.style());
                }
            }
        }
        _ => (),
    }
}

fn update(app: &App, model: &mut Model, _update: Update) {
    let now = app.time;

    // Process OSC messages
    model.osc_controller.process_messages();
    launch_commands(model, now);

    if model.spawner.due(model.controls.is_playing(), now) {
        spawn_sprites(model, 1, now);
    }

    // second phase of any start: transforms whose settle delay has passed
    model.controller.tick(&mut model.canvas, now);
    prune_spawned(model, now);
}

fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    let window = app.window_rect();

    model
        .renderer
        .draw(&draw, window, &model.canvas, &model.controls, app.time);
    if model.debug_flag {
        model.renderer.draw_debug(&draw, window, &model.canvas, app.time);
    }

    if let Err(e) = draw.to_frame(app, &frame) {
        warn!("Failed to draw frame: {:?}", e);
    }
}

// ******************************* OSC Launcher *******************************

fn launch_commands(model: &mut Model, now: f32) {
    for command in model.osc_controller.take_commands() {
        let Some(action) = command.action() else {
            if let OscCommand::Spawn { count } = command {
                spawn_sprites(model, count, now);
            }
            continue;
        };

        match model
            .controls
            .trigger(action, &mut model.controller, &mut model.canvas, now)
        {
            Ok(false) => (),
            Ok(true) => match command {
                OscCommand::Pause => model.spawner.reset_timer(),
                OscCommand::Mute => info!("Background music muted"),
                _ => (),
            },
            Err(e) => error!("{:?} failed: {}", action, e),
        }
    }
}

// ******************************* Spawning *******************************

fn spawn_sprites(model: &mut Model, count: usize, now: f32) {
    for _ in 0..model.spawner.batch_size(count) {
        let def = model.spawner.spawn(&mut model.random, &model.scene.canvas);
        let Some(anim) = def.animation.clone() else {
            continue;
        };
        let added = model.canvas.add_sprite_def(&def).and_then(|_| {
            model
                .controller
                .adopt(&model.canvas, &def.id, anim.direction, anim.distance, anim.duration)
        });
        if let Err(e) = added {
            warn!("Could not spawn {}: {}", def.id, e);
        }
    }

    debug!("{} sprites spawned so far", model.spawner.spawned());

    // new sprites join in while playing
    if model.controls.is_playing() {
        if let Err(e) = model.controller.start(&mut model.canvas, now) {
            error!("Start failed for spawned sprites: {}", e);
        }
    }
}

// spawned sprites are dropped once they have nothing left to travel
fn prune_spawned(model: &mut Model, now: f32) {
    for id in model.spawner.expired(model.controller.elements(), now) {
        model.controller.release(&id);
        model.canvas.remove_sprite(&id);
    }
}
