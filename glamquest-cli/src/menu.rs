//! Top-level menu rendering and dispatch over a running session.

use std::io::BufRead;

use anyhow::{Context, Result};
use colored::Colorize;
use log::debug;

use glamquest_game::{Combatant, EventStatus, GameSession, resolve_event};

use crate::input::InputReader;

/// Actions reachable from the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    CheckStats,
    GainGlamour,
    BraveEncounter,
    SimulateBrawl,
    ManageInventory,
    Exit,
}

impl MenuAction {
    const fn from_choice(choice: u32) -> Option<Self> {
        match choice {
            1 => Some(Self::CheckStats),
            2 => Some(Self::GainGlamour),
            3 => Some(Self::BraveEncounter),
            4 => Some(Self::SimulateBrawl),
            5 => Some(Self::ManageInventory),
            6 => Some(Self::Exit),
            _ => None,
        }
    }
}

const MENU_CHOICES: [u32; 6] = [1, 2, 3, 4, 5, 6];

/// Read and dispatch menu actions until the session stops.
pub fn run_menu_loop<R: BufRead>(
    session: &mut GameSession,
    input: &mut InputReader<R>,
) -> Result<()> {
    while session.is_running() {
        render_menu();
        let choice = input
            .read_choice("Enter your number: ", &MENU_CHOICES)
            .context("menu input ended")?;
        let Some(action) = MenuAction::from_choice(choice) else {
            continue;
        };
        debug!("dispatching menu action {action:?}");
        dispatch(session, input, action)?;
    }
    Ok(())
}

fn render_menu() {
    println!();
    println!("{}", "What would you like to do?".bold());
    println!("1. Check player stats");
    println!("2. Gain glamour points");
    println!("3. Brave an encounter");
    println!("4. Simulate a brawl");
    println!("5. Manage inventory");
    println!("6. Exit game");
}

fn dispatch<R: BufRead>(
    session: &mut GameSession,
    input: &mut InputReader<R>,
    action: MenuAction,
) -> Result<()> {
    match action {
        MenuAction::CheckStats => check_stats(session),
        MenuAction::GainGlamour => gain_glamour(session, input)?,
        MenuAction::BraveEncounter => brave_encounter(session, input)?,
        MenuAction::SimulateBrawl => simulate_brawl(session),
        MenuAction::ManageInventory => {
            println!("The inventory is still being packed. Check back soon!");
        }
        MenuAction::Exit => {
            println!("Thanks for playing! See you next time.");
            session.stop();
        }
    }
    Ok(())
}

fn check_stats(session: &GameSession) {
    for member in session.party() {
        println!();
        println!("Stats for {}:", member.name().bold());
        println!("  {}", member.health());
        println!("  {}", member.strength());
        println!("  {}", member.intelligence());
        println!("  Glamour Points: {}", member.glamour_points());
    }
}

fn gain_glamour<R: BufRead>(session: &mut GameSession, input: &mut InputReader<R>) -> Result<()> {
    let amount = input
        .read_number("Enter the amount of glamour points to gain: ")
        .context("glamour input ended")?;
    for award in session.award_glamour(amount) {
        println!(
            "{} collected {} glamour points. Total: {}",
            award.member,
            award.gained,
            award.total.to_string().bright_magenta()
        );
    }
    Ok(())
}

fn brave_encounter<R: BufRead>(
    session: &mut GameSession,
    input: &mut InputReader<R>,
) -> Result<()> {
    let Some(event) = session.draw_event() else {
        return Ok(());
    };
    println!();
    println!("{}", event.prompt_text.italic());

    let member_idx = input
        .select_party_member(session.party())
        .context("party selection ended")?;
    let member = &session.party()[member_idx];
    let kind = input
        .select_stat(member)
        .context("stat selection ended")?;

    let resolution = resolve_event(&event, kind.display_name());
    debug!(
        "{} chose {} and resolved {:?}",
        member.name(),
        kind,
        resolution.status
    );
    let line = match resolution.status {
        EventStatus::Pass => resolution.message.green(),
        EventStatus::PartialPass => resolution.message.yellow(),
        EventStatus::Fail | EventStatus::Unknown => resolution.message.red(),
    };
    println!("{line}");
    Ok(())
}

fn simulate_brawl(session: &mut GameSession) {
    let Some(report) = session.simulate_brawl() else {
        return;
    };
    println!("{} appeared!", report.enemy.red().bold());
    for attack in &report.attacks {
        println!(
            "{} attacks {} for {} damage! Remaining health: {}",
            attack.attacker, attack.target, attack.damage.amount, attack.damage.remaining
        );
        if attack.damage.defeated {
            println!("{}", format!("{} has been defeated!", attack.target).red());
        }
    }
    println!("The battle has ended!");
}
