//! poolscope binary executable.

fn main() -> eyre::Result<()> {
    poolscope_cli::run()
}
