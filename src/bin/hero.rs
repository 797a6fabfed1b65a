#![no_std]
#![no_main]

use defmt::info;
use embassy_executor::Spawner;
use embassy_futures::yield_now;
use embassy_rp::block::ImageDef;
use launchpad_games::{
    firmware::{self, Board, TickClock},
    hero::Hero,
    io::{Snapshot, present},
};
use {defmt_rtt as _, panic_probe as _};

#[unsafe(link_section = ".start_block")]
#[used]
pub static IMAGE_DEF: ImageDef = ImageDef::secure_exe();

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let Board { mut panel, mut buttons } = firmware::init(spawner);
    let clock = TickClock;

    let mut game = Hero::new();
    info!("hero ready, {=usize} notes", game.song().len());

    loop {
        let input = Snapshot::read(&mut buttons, &clock);
        let effects = game.step(input);
        present(&mut panel, &effects).await;
        // Lets the tick task run between polls.
        yield_now().await;
    }
}
