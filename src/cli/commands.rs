//! 控制台命令处理
//!
//! 交互式会话中的每一行输入都被解析为一条命令并作用于会话持有的图

use indexmap::IndexMap;

use crate::algorithm::PathFinder;
use crate::error::{Error, Result};
use crate::graph::{Graph, VertexId};

/// 控制台命令执行结果
#[derive(Debug, PartialEq, Eq)]
pub enum CommandResult {
    /// 继续运行
    Continue,
    /// 退出程序
    Exit,
    /// 显示消息
    Message(String),
    /// 错误
    Error(String),
}

/// 会话状态：图以及名称到顶点的映射
#[derive(Debug, Default)]
pub struct Session {
    graph: Graph<String>,
    names: IndexMap<String, VertexId>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn graph(&self) -> &Graph<String> {
        &self.graph
    }

    /// 名称或 `v<N>` 形式的 ID 解析为顶点
    fn lookup(&self, token: &str) -> Result<VertexId> {
        if let Some(&id) = self.names.get(token) {
            return Ok(id);
        }
        token
            .strip_prefix('v')
            .and_then(|n| n.parse::<u64>().ok())
            .map(VertexId::new)
            .filter(|&id| self.graph.vertex(id).is_some())
            .ok_or_else(|| Error::ParseError(format!("未知顶点: {}", token)))
    }

    fn lookup_pair(&self, args: &str) -> Result<(VertexId, VertexId)> {
        let parts: Vec<&str> = args.split_whitespace().collect();
        match parts.as_slice() {
            [a, b] => Ok((self.lookup(a)?, self.lookup(b)?)),
            _ => Err(Error::ParseError("需要两个顶点".to_string())),
        }
    }

    fn lookup_one(&self, args: &str) -> Result<VertexId> {
        let parts: Vec<&str> = args.split_whitespace().collect();
        match parts.as_slice() {
            [a] => self.lookup(a),
            _ => Err(Error::ParseError("需要一个顶点".to_string())),
        }
    }

    fn add_named(&mut self, name: &str) -> VertexId {
        if let Some(&id) = self.names.get(name) {
            self.graph.add_vertex(id);
            return id;
        }
        let id = self.graph.insert_vertex(name.to_string());
        self.names.insert(name.to_string(), id);
        id
    }

    fn label(&self, id: VertexId) -> String {
        self.graph
            .value(id)
            .cloned()
            .unwrap_or_else(|| id.to_string())
    }
}

/// 解析并执行控制台命令
pub fn execute_command(input: &str, session: &mut Session) -> CommandResult {
    let input = input.trim();
    if input.is_empty() {
        return CommandResult::Continue;
    }

    let (cmd, args) = input.split_once(char::is_whitespace).unwrap_or((input, ""));
    let cmd = cmd.to_lowercase();
    let args = args.trim();

    match dispatch(&cmd, args, session) {
        Ok(result) => result,
        Err(e) => CommandResult::Error(e.to_string()),
    }
}

fn dispatch(cmd: &str, args: &str, session: &mut Session) -> Result<CommandResult> {
    let result = match cmd {
        "help" | "h" | "?" => CommandResult::Message(get_help_text()),

        "quit" | "q" | "exit" => CommandResult::Exit,

        "vertex" | "v" => {
            if args.is_empty() {
                return Err(Error::ParseError("用法: vertex <名称>...".to_string()));
            }
            let ids: Vec<String> = args
                .split_whitespace()
                .map(|name| session.add_named(name).to_string())
                .collect();
            CommandResult::Message(format!("已加入: {}", ids.join(", ")))
        }

        "edge" | "e" => {
            let (u, v) = session.lookup_pair(args)?;
            session.graph.add_edge(u, v);
            CommandResult::Continue
        }

        "unedge" => {
            let (u, v) = session.lookup_pair(args)?;
            session.graph.remove_edge(u, v);
            CommandResult::Continue
        }

        "remove" | "rm" => {
            let id = session.lookup_one(args)?;
            session.graph.remove_vertex(id);
            CommandResult::Continue
        }

        "neighbors" | "n" => {
            let id = session.lookup_one(args)?;
            let labels: Vec<String> = session
                .graph
                .neighbors(id)
                .into_iter()
                .map(|n| session.label(n))
                .collect();
            CommandResult::Message(format!("[{}]", labels.join(", ")))
        }

        "dfs" => {
            let id = session.lookup_one(args)?;
            let values = session.graph.depth_first_search(id)?;
            CommandResult::Message(join_values(&values))
        }

        "bfs" => {
            let id = session.lookup_one(args)?;
            let values = session.graph.breadth_first_search(id)?;
            CommandResult::Message(join_values(&values))
        }

        "dist" | "distance" => {
            let (u, v) = session.lookup_pair(args)?;
            match session.graph.distance_of_shortest_path(u, v)? {
                Some(d) => CommandResult::Message(d.to_string()),
                None => CommandResult::Message("不可达".to_string()),
            }
        }

        "path" => {
            let (u, v) = session.lookup_pair(args)?;
            match PathFinder::new(&session.graph).shortest_path(u, v)? {
                Some(path) => {
                    let labels: Vec<String> =
                        path.vertices.iter().map(|&id| session.label(id)).collect();
                    CommandResult::Message(format!("{} ({})", labels.join(" - "), path.length))
                }
                None => CommandResult::Message("不可达".to_string()),
            }
        }

        "stats" | "info" => CommandResult::Message(format!(
            "顶点数: {}\n边数: {}",
            session.graph.vertex_count(),
            session.graph.edge_count()
        )),

        _ => {
            return Err(Error::ParseError(format!(
                "未知命令: {}，输入 help 查看帮助",
                cmd
            )))
        }
    };

    Ok(result)
}

fn join_values(values: &[&String]) -> String {
    values
        .iter()
        .map(|s| s.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

fn get_help_text() -> String {
    r#"
命令:
  vertex, v <名称>...        加入顶点（已有同名顶点则重新加入）
  edge, e <a> <b>            添加边
  unedge <a> <b>             删除边
  remove, rm <a>             删除顶点
  neighbors, n <a>           查看邻居
  dfs <a>                    深度优先遍历
  bfs <a>                    广度优先遍历
  dist <a> <b>               最短路径距离
  path <a> <b>               最短路径
  stats                      统计信息
  help, h                    帮助
  quit, q                    退出

顶点可以用名称或 v<N> 形式的 ID 引用
"#
    .to_string()
}
