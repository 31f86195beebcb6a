// Walks a directory-like tree in post-order and prints every entry.
//
// Each call to `walk()` is a producer that emits one nested sequence per
// child before emitting its own name, so the output lists every child before
// its parent. Entries named with a leading `!` simulate an unreadable
// directory and make the walk fail.

use std::fmt;
use std::ops::ControlFlow::{Break, Continue};

use recoro::Coro;
use recoro::Emit::{Nested, Value};
use recoro::Error;
use recoro::Seq;
use recoro::from_control_flow;

struct Entry {
    name: &'static str,
    children: Vec<Entry>,
}

fn file(name: &'static str) -> Entry {
    Entry {
        name,
        children: Vec::new(),
    }
}

fn dir(name: &'static str, children: Vec<Entry>) -> Entry {
    Entry { name, children }
}

#[derive(Debug, Clone, PartialEq)]
struct Unreadable(&'static str);

impl fmt::Display for Unreadable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cannot read {}", self.0)
    }
}

fn walk<'a>(entry: &'a Entry, prefix: String) -> Seq<'a, String, Unreadable> {
    let mut children = entry.children.iter();
    let mut done = false;
    from_control_flow(move |()| {
        if done {
            return Break(Ok(()));
        }
        if let Some(unreadable) = entry.name.strip_prefix('!') {
            done = true;
            return Break(Err(Unreadable(unreadable)));
        }
        let path = format!("{prefix}/{}", entry.name);
        match children.next() {
            Some(child) => Continue(Nested(walk(child, path))),
            None => {
                done = true;
                Continue(Value(path))
            }
        }
    })
    .into_seq()
}

fn print_walk(root: &Entry) -> Result<usize, Error<Unreadable>> {
    let mut count = 0;
    for path in walk(root, String::new()) {
        println!("  {}", path?);
        count += 1;
    }
    Ok(count)
}

fn main() {
    let tree = dir(
        "src",
        vec![
            file("lib.rs"),
            dir("frame", vec![file("mod.rs"), file("body.rs")]),
            dir("empty", Vec::new()),
            file("seq.rs"),
        ],
    );
    println!("post-order walk:");
    match print_walk(&tree) {
        Ok(count) => println!("{count} entries"),
        Err(e) => println!("walk failed: {e}"),
    }

    let broken = dir(
        "src",
        vec![file("lib.rs"), dir("!secret", vec![file("keys.rs")])],
    );
    println!("post-order walk with an unreadable directory:");
    match print_walk(&broken) {
        Ok(count) => println!("{count} entries"),
        Err(e) => println!("walk failed: {e}"),
    }
}
