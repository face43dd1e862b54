// Type usernames, one per line, to see their latest rating and the players closest to them.
use io::{BufRead, Write};
use skill_history::data_processing::{UserName, UserRatings, read_json};
use skill_history::summary::{PlayerSummary, RatingBoard};
use skill_history::telemetry::init_subscriber;
use std::io;

fn describe(player: &PlayerSummary) -> String {
    format!(
        "#{:<5} {:<24} {:6.2} (max {:6.2}, last change {})",
        player.rank, player.username, player.latest_rating, player.max_rating, player.last_change_date
    )
}

fn main() {
    init_subscriber("info");

    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 && args.len() != 3 {
        tracing::error!("Usage: {} ratings_file [count]", args[0]);
        return;
    }
    let count = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(5);

    let entries: Vec<UserRatings> = match read_json(&args[1]) {
        Ok(entries) => entries,
        Err(err) => {
            tracing::error!("{}", err);
            return;
        }
    };
    let board = RatingBoard::new(&entries);
    tracing::info!(
        "{} rated players, mean rating {:.2}",
        board.num_players(),
        board.mean_rating().unwrap_or(0.)
    );

    println!("Type some usernames on separate lines, \"TOP\" for the leaders, or \"DONE\":");

    let (stdin, stdout) = (io::stdin(), io::stdout());
    let mut out = io::BufWriter::new(stdout.lock());
    for line in stdin.lock().lines().map(|l| l.expect("Failed stdin read")) {
        let line = line.trim();
        if line == "DONE" {
            break;
        }
        if line == "TOP" {
            for player in board.top(count) {
                writeln!(out, "{}", describe(player)).ok();
            }
        } else {
            match UserName::parse(line) {
                Ok(name) => match board.find(&name) {
                    Some(player) => {
                        writeln!(out, "{}", describe(player)).ok();
                        for other in board.closest_to(&name, count) {
                            writeln!(out, "    {}", describe(other)).ok();
                        }
                    }
                    None => {
                        writeln!(out, "No rated player named {}", line).ok();
                    }
                },
                Err(msg) => {
                    writeln!(out, "{}", msg).ok();
                }
            }
        }
        out.flush().ok();
    }
}
