//! The interactive html report.
//!
//! Self-contained document: inline stylesheet, `<details>` blocks for every
//! expandable action, a flag table per action that carries flags. Per-kind
//! presentation (label and css class) is a static match on the action kind.

use std::fmt::Write;
use std::path::Path;

use crate::resolve::Action;

const STYLE: &str = r#"
body { font-family: -apple-system, 'Segoe UI', Roboto, sans-serif; margin: 2rem; color: #24292f; }
h2 { font-weight: 500; }
.target { font-family: monospace; background: #f6f8fa; padding: 0 .3rem; }
.action { border: 1px solid #d0d7de; border-radius: 6px; margin: .4rem 0; padding: .4rem .6rem; }
.action.script { background: #f6f8fa; }
.action.command { background: #fff; }
.kind { font-size: .75rem; text-transform: uppercase; letter-spacing: .05em; margin-right: .5rem; }
.script > summary > .kind, .script > .kind { color: #0969da; }
.command > summary > .kind, .command > .kind { color: #8250df; }
.location { color: #57606a; font-style: italic; }
summary { cursor: pointer; }
table.flags { border-collapse: collapse; margin: .5rem 0 .2rem 1rem; }
table.flags th, table.flags td { border: 1px solid #d0d7de; padding: .15rem .5rem; text-align: left; font-family: monospace; font-size: .85rem; }
.hook-label { font-size: .75rem; color: #57606a; margin-top: .4rem; }
"#;

/// Render the resolved action sequence as a standalone html document.
pub fn render_html(actions: &[Action], manifest_path: &Path) -> String {
  let mut body = String::new();
  for action in actions {
    render_action(&mut body, action);
  }
  format!(
    "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>runmap report</title>\n\
     <style>{STYLE}</style>\n</head>\n<body>\n\
     <h2>Script map for <span class=\"target\">{}</span></h2>\n\
     <div class=\"report\">\n{body}</div>\n</body>\n</html>\n",
    escape(&manifest_path.display().to_string())
  )
}

fn render_action(out: &mut String, action: &Action) {
  match action {
    Action::Command { name, flags } => {
      if flags.is_empty() {
        let _ = writeln!(
          out,
          "<div class=\"action command\">{}{}</div>",
          kind_tag(action),
          escape(name)
        );
      } else {
        let _ = writeln!(
          out,
          "<details class=\"action command\"><summary>{}{}</summary>",
          kind_tag(action),
          escape(name)
        );
        render_flags(out, action);
        out.push_str("</details>\n");
      }
    }
    Action::Script {
      name,
      flags,
      pre,
      post,
      steps,
      location,
    } => {
      let location_suffix = match location {
        Some(path) => format!(" <span class=\"location\">(under {})</span>", escape(path)),
        None => String::new(),
      };
      let _ = writeln!(
        out,
        "<details open class=\"action script\"><summary>{}{}{location_suffix}</summary>",
        kind_tag(action),
        escape(name)
      );
      if !flags.is_empty() {
        render_flags(out, action);
      }
      if let Some(pre) = pre {
        out.push_str("<div class=\"hook-label\">pre</div>\n");
        render_action(out, pre);
      }
      for step in steps {
        render_action(out, step);
      }
      if let Some(post) = post {
        out.push_str("<div class=\"hook-label\">post</div>\n");
        render_action(out, post);
      }
      out.push_str("</details>\n");
    }
  }
}

fn render_flags(out: &mut String, action: &Action) {
  out.push_str("<table class=\"flags\"><thead><tr><th>Name</th><th>Value</th></tr></thead><tbody>\n");
  for flag in action.flags() {
    let value = flag.value.as_deref().unwrap_or("-");
    let _ = writeln!(out, "<tr><td>{}</td><td>{}</td></tr>", escape(&flag.name), escape(value));
  }
  out.push_str("</tbody></table>\n");
}

/// The per-kind label, as a static lookup on the action variant.
fn kind_tag(action: &Action) -> &'static str {
  match action {
    Action::Script { .. } => "<span class=\"kind\">npm script</span>",
    Action::Command { .. } => "<span class=\"kind\">command</span>",
  }
}

fn escape(text: &str) -> String {
  let mut out = String::with_capacity(text.len());
  for ch in text.chars() {
    match ch {
      '&' => out.push_str("&amp;"),
      '<' => out.push_str("&lt;"),
      '>' => out.push_str("&gt;"),
      '"' => out.push_str("&quot;"),
      _ => out.push(ch),
    }
  }
  out
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::token::Flag;

  fn script(name: &str, steps: Vec<Action>) -> Action {
    Action::Script {
      name: name.to_string(),
      flags: vec![],
      pre: None,
      post: None,
      steps,
      location: None,
    }
  }

  #[test]
  fn renders_nested_structure() {
    let actions = vec![script(
      "build",
      vec![Action::Command {
        name: "compile".to_string(),
        flags: vec![Flag::new("--watch", None)],
      }],
    )];
    let html = render_html(&actions, Path::new("/pkg/package.json"));

    assert!(html.contains("/pkg/package.json"));
    assert!(html.contains("npm script</span>build"));
    assert!(html.contains("command</span>compile"));
    assert!(html.contains("<td>--watch</td><td>-</td>"));
  }

  #[test]
  fn escapes_markup_in_names_and_values() {
    let actions = vec![Action::Command {
      name: "echo <b>&</b>".to_string(),
      flags: vec![Flag::new("--msg", Some("\"hi\""))],
    }];
    let html = render_html(&actions, Path::new("/pkg/package.json"));
    assert!(html.contains("echo &lt;b&gt;&amp;&lt;/b&gt;"));
    assert!(html.contains("&quot;hi&quot;"));
    assert!(!html.contains("<b>&</b>"));
  }

  #[test]
  fn hop_location_is_shown_next_to_the_name() {
    let actions = vec![Action::Script {
      name: "pack".to_string(),
      flags: vec![],
      pre: None,
      post: None,
      steps: vec![],
      location: Some("/other/package.json".to_string()),
    }];
    let html = render_html(&actions, Path::new("/pkg/package.json"));
    assert!(html.contains("(under /other/package.json)"));
  }

  #[test]
  fn hooks_render_with_labels() {
    let mut action = script("build", vec![]);
    if let Action::Script { pre, post, .. } = &mut action {
      *pre = Some(Box::new(script("prebuild", vec![])));
      *post = Some(Box::new(script("postbuild", vec![])));
    }
    let html = render_html(&[action], Path::new("/pkg/package.json"));
    assert!(html.contains("npm script</span>prebuild"));
    assert!(html.contains("npm script</span>postbuild"));
    assert_eq!(html.matches("hook-label").count(), 3); // 2 labels + 1 css rule
  }
}
