use macroquad::prelude::*;

use client::run::run_game_loop;
use common::config::GameConfig;

fn window_conf() -> Conf {
    Conf {
        window_title: "Labyrinth".to_owned(),
        window_width: 800,
        window_height: 800,
        high_dpi: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let config = match GameConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}, using default settings", e);
            GameConfig::default()
        }
    };

    run_game_loop(config).await;
}
