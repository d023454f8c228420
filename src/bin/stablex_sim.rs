//! Headless run of the demo market: replays trades from the command line and prints the
//! resulting balances, order book, candles and fills.

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use stablex::{
    DEMO, SessionState, TradeDirection, TradeIntent,
    ui::format_price,
    utils::{epoch_ms_to_clock, epoch_ms_to_utc, now_timestamp_ms},
};
use tabled::{Table, Tabled, settings::Style};

#[derive(Debug, Clone, Copy)]
struct TradeArg {
    direction: TradeDirection,
    quantity: f64,
}

fn parse_trade(s: &str) -> Result<TradeArg, String> {
    let (dir, qty) = s
        .split_once(':')
        .ok_or_else(|| format!("expected <buy|sell>:<quantity>, got '{s}'"))?;
    Ok(TradeArg {
        direction: dir.parse()?,
        quantity: qty
            .trim()
            .parse()
            .map_err(|e| format!("bad quantity '{qty}': {e}"))?,
    })
}

#[derive(Parser, Debug)]
#[command(about = "Replay trades against the Stablex demo market")]
struct Args {
    /// Trade to run, in order. Repeatable, e.g. `--trade buy:100 --trade sell:40`
    #[arg(long = "trade", value_parser = parse_trade)]
    trades: Vec<TradeArg>,

    /// Simulated seconds between consecutive trades
    #[arg(long, default_value_t = 0)]
    spacing_secs: u64,

    /// Stop at the first rejected trade instead of skipping it
    #[arg(long)]
    strict: bool,

    /// Print the final session as JSON instead of tables
    #[arg(long)]
    json: bool,
}

#[derive(Tabled)]
struct LevelRow {
    #[tabled(rename = "Side")]
    side: &'static str,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "Size")]
    size: f64,
    #[tabled(rename = "Notional")]
    notional: String,
}

#[derive(Tabled)]
struct BarRow {
    #[tabled(rename = "Time")]
    time: String,
    #[tabled(rename = "Open")]
    open: String,
    #[tabled(rename = "High")]
    high: String,
    #[tabled(rename = "Low")]
    low: String,
    #[tabled(rename = "Close")]
    close: String,
}

#[derive(Tabled)]
struct FillRow {
    #[tabled(rename = "Time")]
    time: String,
    #[tabled(rename = "Side")]
    side: TradeDirection,
    #[tabled(rename = "Qty")]
    quantity: f64,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "Notional")]
    notional: String,
    #[tabled(rename = "New price")]
    new_price: String,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let start_ms = now_timestamp_ms();
    let spacing_ms = i64::try_from(args.spacing_secs * 1000).context("--spacing-secs too large")?;
    let mut session = SessionState::new(&DEMO.market, start_ms);

    for (i, trade) in args.trades.iter().enumerate() {
        let now = start_ms + spacing_ms * i as i64;
        let outcome = TradeIntent::new(trade.direction, trade.quantity)
            .and_then(|intent| session.execute(intent, now));
        if let Err(e) = outcome {
            if args.strict {
                return Err(anyhow!(e)).with_context(|| format!("trade #{} rejected", i + 1));
            }
            eprintln!("trade #{} skipped: {}", i + 1, e);
        }
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&session)?);
        return Ok(());
    }

    println!(
        "Session {} UTC, {} trade(s) requested",
        epoch_ms_to_utc(start_ms),
        args.trades.len()
    );
    print_tables(&session);
    Ok(())
}

fn print_tables(session: &SessionState) {
    let balances = session.balances();
    println!(
        "{}/{} @ {}   {} {}   {} {}\n",
        session.base_symbol,
        session.quote_symbol,
        format_price(session.price()),
        balances.base,
        session.base_symbol,
        balances.quote,
        session.quote_symbol
    );

    let book = session.book();
    let levels = book
        .asks
        .iter()
        .rev()
        .map(|l| ("ask", l))
        .chain(book.bids.iter().map(|l| ("bid", l)))
        .map(|(side, l)| LevelRow {
            side,
            price: format_price(l.price),
            size: l.size,
            notional: format_price(l.notional()),
        });
    println!("{}\n", Table::new(levels).with(Style::rounded()));

    let interval = session.bar_interval_ms();
    // Only bars that moved
    let bars = session
        .series()
        .bars()
        .iter()
        .filter(|b| b.high != b.low)
        .map(|b| BarRow {
            time: epoch_ms_to_clock(b.time_ms, interval),
            open: format_price(b.open),
            high: format_price(b.high),
            low: format_price(b.low),
            close: format_price(b.close),
        });
    println!("{}\n", Table::new(bars).with(Style::rounded()));

    let fills = session.fills().map(|f| FillRow {
        time: epoch_ms_to_clock(f.time_ms, interval),
        side: f.direction,
        quantity: f.quantity,
        price: format_price(f.price),
        notional: format_price(f.notional),
        new_price: format_price(f.new_price),
    });
    println!("{}", Table::new(fills).with(Style::rounded()));
}
