use crate::commands::{Command, CommandContext, CommandResult};
use crate::fs::{normalize_path, render_path, Node};

pub struct TreeCommand;

const HELP: &str = "tree - list contents of directories in a tree-like format

Usage: tree [DIRECTORY]

Children are sorted by name at every level.
  --help      display this help and exit";

const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const PIPE_INDENT: &str = "│   ";
const SPACE_INDENT: &str = "    ";

/// Rendered tree plus the totals shown in the summary line.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TreeResult {
    pub output: String,
    pub dir_count: usize,
    pub file_count: usize,
}

impl Command for TreeCommand {
    fn name(&self) -> &'static str {
        "tree"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        if ctx.args.iter().any(|a| a == "--help") {
            return CommandResult::success(format!("{}\n", HELP));
        }
        if ctx.args.len() > 1 {
            return CommandResult::error("tree: too many arguments\n".to_string());
        }

        let components = match ctx.args.first() {
            Some(path) => normalize_path(path, ctx.cwd),
            None => ctx.cwd.clone(),
        };
        let Some(start) = ctx.store.find_node(&components) else {
            let shown = ctx.args.first().cloned().unwrap_or_else(|| render_path(ctx.cwd));
            return CommandResult::error(format!("tree: {}: No such file or directory\n", shown));
        };

        let result = render_tree(start, &render_path(&components));

        let mut output = result.output;
        output.push('\n');
        output.push_str(&format!(
            "{} director{}, {} file{}\n",
            result.dir_count,
            if result.dir_count == 1 { "y" } else { "ies" },
            result.file_count,
            if result.file_count == 1 { "" } else { "s" }
        ));
        CommandResult::success(output)
    }
}

/// Render `node` under a `header` line. Children are sorted by name and
/// only directories are descended into.
pub fn render_tree(node: &Node, header: &str) -> TreeResult {
    let mut result = TreeResult {
        output: format!("{}\n", header),
        ..Default::default()
    };
    if node.is_file() {
        result.file_count = 1;
        return result;
    }
    let sub = render_children(node, "");
    result.output.push_str(&sub.output);
    result.dir_count = sub.dir_count;
    result.file_count = sub.file_count;
    result
}

fn render_children(dir: &Node, prefix: &str) -> TreeResult {
    let mut result = TreeResult::default();
    let Some(children) = dir.children() else {
        return result;
    };

    let names = dir.sorted_child_names();
    for (idx, name) in names.iter().enumerate() {
        let is_last = idx == names.len() - 1;
        let connector = if is_last { LAST_BRANCH } else { BRANCH };
        result.output.push_str(&format!("{}{}{}\n", prefix, connector, name));

        match children.get(name) {
            Some(child @ Node::Directory { .. }) => {
                result.dir_count += 1;
                let child_prefix = format!("{}{}", prefix, if is_last { SPACE_INDENT } else { PIPE_INDENT });
                let sub = render_children(child, &child_prefix);
                result.output.push_str(&sub.output);
                result.dir_count += sub.dir_count;
                result.file_count += sub.file_count;
            }
            Some(Node::File { .. }) => result.file_count += 1,
            None => {}
        }
    }

    result
}
