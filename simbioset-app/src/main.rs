//! Simbioset console shell.
//!
//! Loads the config, wires the clients and stores, then prints the
//! knowledge tree and aggregate stats. The real frontend lives elsewhere;
//! this binary exercises the same client stack end to end.

use color_eyre::eyre::Result;
use simbioset_app::config::AppConfig;
use simbioset_app::error::AppError;
use simbioset_app::i18n::I18n;
use simbioset_app::session::SessionState;
use simbioset_client::types::kb::TreeParams;
use simbioset_client::{KnowledgeBaseClient, SessionClient, Transport};
use simbioset_core::{validate_parent_refs, ConceptNode, NodeId};
use std::collections::HashMap;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    run().await?;
    Ok(())
}

/// The fallible pipeline: config, clients, stores, tree, stats. Everything
/// that can abort the shell funnels through [`AppError`].
async fn run() -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let transport = Transport::new(&config.api_base_url, config.request_timeout_ms)?;
    let kb = KnowledgeBaseClient::new(transport.clone());
    let session_client = SessionClient::new(transport.clone());

    let mut i18n = I18n::init(&config.prefs_path, None, config.default_language());
    i18n.load_table(&config.translations_path);

    let mut session = SessionState::new();
    session.load(&session_client).await;
    match session.session_id() {
        Some(id) => tracing::info!(session_id = %id, "session loaded"),
        None => tracing::info!("no session, browsing unauthenticated"),
    }

    transport.health().await?;

    let root = kb.get_root().await?;
    let tree = kb.get_tree(&TreeParams::default()).await?;
    if let Err(err) = validate_parent_refs(&tree.nodes) {
        tracing::warn!(error = %err, "tree response has unresolved parents");
    }

    println!("{}", i18n.t("Árbol de conocimiento"));
    print_subtree(&tree.nodes, root.node_id, 0);

    let stats = kb.get_stats().await?;
    println!();
    println!(
        "{}: {} | {}: {} | {}: {}",
        i18n.t("Nodos"),
        stats.node_count,
        i18n.t("Sesiones"),
        stats.session_count,
        i18n.t("Fuentes"),
        stats.source_count,
    );

    Ok(())
}

fn print_subtree(nodes: &[ConceptNode], root_id: NodeId, depth: usize) {
    let by_id: HashMap<NodeId, &ConceptNode> =
        nodes.iter().map(|n| (n.node_id, n)).collect();
    let mut children: HashMap<NodeId, Vec<&ConceptNode>> = HashMap::new();
    for node in nodes {
        if let Some(parent_id) = node.parent_id {
            children.entry(parent_id).or_default().push(node);
        }
    }
    print_node(&by_id, &children, root_id, depth);
}

fn print_node(
    by_id: &HashMap<NodeId, &ConceptNode>,
    children: &HashMap<NodeId, Vec<&ConceptNode>>,
    id: NodeId,
    depth: usize,
) {
    if let Some(node) = by_id.get(&id) {
        let marker = if node.selected { "*" } else { "-" };
        println!("{}{} {}", "  ".repeat(depth), marker, node.content);
        if node.expanded {
            if let Some(kids) = children.get(&id) {
                for child in kids {
                    print_node(by_id, children, child.node_id, depth + 1);
                }
            }
        }
    }
}
