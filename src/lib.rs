#![doc = r#"
issue2post — turn a GitHub issue export into Hugo posts.

Reads the JSON array produced by `jrdeng/query-issues-action` and writes one
Markdown post per issue into a freshly recreated directory. Each post carries
Hugo front matter (`title`, `date`, `slug`, `tags`), the raw issue body and an
[utterances](https://utteranc.es) widget bound to the same issue, so readers'
comments land on GitHub.

Quick start
-----------
```rust,no_run
use issue2post::{SiteParams, generate_posts};

fn main() -> issue2post::Result<()> {
    let params = SiteParams::new("jrdeng", "blog", "issues.json", "content/post");
    let report = generate_posts(&params)?;
    println!("wrote {} posts", report.written);
    Ok(())
}
```

Render a single post in memory
------------------------------
```rust
use issue2post::{Issue, post_file_name, render_post};

let issue = Issue {
    number: 42,
    title: "Fix/bug: crash".to_string(),
    body: "It crashed.".to_string(),
    created_at: "2021-06-01T00:00:00Z".to_string(),
    labels: vec!["bug".to_string()],
    url: "https://github.com/jrdeng/blog/issues/42".to_string(),
};

assert_eq!(post_file_name(&issue), "42_Fix_bug: crash.md");
let post = render_post("jrdeng", "blog", &issue).unwrap();
assert!(post.contains("date: 2021-06-01T08:00:00+08:00\n"));
```

Error handling
--------------
All public functions return `issue2post::Result<T>`. `Error::exit_code`
maps each error to the status the CLI exits with.

Useful modules
--------------
- [`api`] — high-level entry points.
- [`core`] — run parameters and the post renderer.
- [`io`] — issue loading and output directory preparation.
- [`error`] — crate-level `Error` and `Result`.
"#]

pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

pub use crate::core::params::SiteParams;
pub use error::{Error, Result};
pub use types::{Issue, RawIssue};

pub use api::{PostReport, generate_posts, post_file_name, render_post, write_posts};
