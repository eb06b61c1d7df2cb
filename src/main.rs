// algoscope: step-by-step algorithm visualizer for the terminal

use std::io;
use std::path::PathBuf;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{error, info};

use algoscope::algorithm::{Algorithm, StartParams};
use algoscope::config::Config;
use algoscope::logging::{self, LogTarget};
use algoscope::structures::{Generator, NodeId, Structure};
use algoscope::ui::App;

#[derive(Parser, Debug)]
#[command(
    name = "algoscope",
    version,
    about = "Watch sorting, graph and tree algorithms run step by step"
)]
struct Cli {
    /// Algorithm to show first (bubble, quick, merge, bfs-graph, dfs-graph,
    /// inorder, preorder, postorder, bfs-tree)
    #[arg(short, long, default_value = "bubble")]
    algorithm: Algorithm,

    /// Number of array elements to sort
    #[arg(long)]
    size: Option<usize>,

    /// Number of graph nodes
    #[arg(long)]
    nodes: Option<usize>,

    /// Number of values inserted into the tree
    #[arg(long)]
    values: Option<usize>,

    /// Sorting speed, 1 (slowest) to 100 (fastest)
    #[arg(long)]
    speed: Option<u8>,

    /// Seed for reproducible structures
    #[arg(long)]
    seed: Option<u64>,

    /// Traversal start node id (defaults to the first node or the root)
    #[arg(long)]
    start: Option<usize>,

    /// Print every step of one run and exit instead of opening the TUI
    #[arg(long)]
    dump: bool,

    /// Write logs to this file
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

impl Cli {
    fn config(&self) -> Config {
        let mut config = Config::default();
        if let Some(size) = self.size {
            config.array.size = size;
        }
        if let Some(nodes) = self.nodes {
            config.graph.node_count = nodes;
        }
        if let Some(values) = self.values {
            config.tree.value_count = values;
        }
        if let Some(speed) = self.speed {
            config.playback.speed = speed;
        }
        config.seed = self.seed;
        config
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = cli.config();
    config.validate()?;

    let target = match (&cli.log_file, cli.dump) {
        (Some(path), _) => LogTarget::File(path),
        (None, true) => LogTarget::Stderr,
        (None, false) => LogTarget::Discard,
    };
    logging::init(target)?;

    let start = cli.start.map(NodeId);
    info!(algorithm = %cli.algorithm, seed = ?config.seed, "starting");

    if cli.dump {
        return dump(&config, cli.algorithm, start);
    }

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(config, cli.algorithm, start);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        error!(error = %err, "event loop failed");
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}

/// Compute one run and print its metadata followed by every step
fn dump(
    config: &Config,
    algorithm: Algorithm,
    start: Option<NodeId>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut generator = Generator::new(config.seed);
    let structure = generator.structure(algorithm.family(), config);
    let trace = algorithm.trace(&structure, StartParams { start }, config.step_limit)?;

    let info = trace.algorithm().info();
    println!("# {} ({})", info.name, trace.algorithm());
    println!("# complexity: {}", info.complexity);
    println!("# {}", info.description);
    println!("# input: {}", describe(&structure));
    println!("# steps: {}", trace.len());
    for (index, step) in trace.steps().iter().enumerate() {
        println!("{:>5}  {}", index, step);
    }

    Ok(())
}

fn describe(structure: &Structure) -> String {
    match structure {
        Structure::Array(values) => format!("{:?}", values),
        Structure::Graph(graph) => {
            let edges: Vec<String> = graph
                .edges()
                .iter()
                .map(|e| format!("{}-{}", e.from.0, e.to.0))
                .collect();
            format!("{} nodes, edges [{}]", graph.len(), edges.join(", "))
        }
        Structure::Tree(tree) => {
            let values: Vec<String> = tree.nodes().iter().map(|n| n.value.to_string()).collect();
            format!("tree from [{}]", values.join(", "))
        }
    }
}
