use anyhow::Context;
use clap::Parser;
use std::io;

use dnd_roster::config::{Arguments, init_tracing};
use dnd_roster::session::Session;
use save::CharacterStore;

fn main() -> anyhow::Result<()> {
    let arguments = Arguments::parse();
    init_tracing(&arguments);
    tracing::debug!(?arguments, "starting roster session");

    let stdin = io::stdin();
    let mut session = Session::new(
        stdin.lock(),
        io::stdout(),
        CharacterStore::default(),
        &arguments,
    );
    session.run().context("roster session failed")
}
