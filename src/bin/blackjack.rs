#![no_std]
#![no_main]

use defmt::{info, panic};
use embassy_executor::Spawner;
use embassy_rp::block::ImageDef;
use embassy_time::Timer;
use launchpad_games::{
    blackjack::Blackjack,
    board::POLL_MS,
    firmware::{self, Board},
    io::{Input as _, present},
};
use {defmt_rtt as _, panic_probe as _};

#[unsafe(link_section = ".start_block")]
#[used]
pub static IMAGE_DEF: ImageDef = ImageDef::secure_exe();

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let Board { mut panel, mut buttons } = firmware::init(spawner);

    let mut game = Blackjack::new();
    present(&mut panel, &game.boot()).await;
    info!("blackjack ready");

    loop {
        let pressed = buttons.buttons();
        match game.step(pressed) {
            Ok(effects) => present(&mut panel, &effects).await,
            Err(err) => panic!("deal failed in {}: {}", game.state(), err),
        }
        Timer::after_millis(POLL_MS).await;
    }
}
