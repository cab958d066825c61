//! Replay harness
//!
//! Feeds a trace of declarations and uses into a session. Declarations get
//! the next free location, uses are recorded on the declaring scope, and
//! uses of unknown names become "undeclared identifier" diagnostics.

use symtab::sema::{ExpType, Location, NOT_FOUND, Session};

#[derive(Debug, Clone, Copy)]
pub enum Event {
    /// Open `scope` as a child of `parent`
    Enter { scope: &'static str, parent: &'static str },
    Declare {
        scope: &'static str,
        name: &'static str,
        ty: ExpType,
        line: u32,
    },
    Use {
        scope: &'static str,
        name: &'static str,
        line: u32,
    },
}

/// Outcome of replaying a trace
#[derive(Debug, Default)]
pub struct Replay {
    pub next_location: Location,
    /// (name, line) of every use that resolved to nothing
    pub undeclared: Vec<(String, u32)>,
}

impl Replay {
    fn allocate(&mut self) -> Location {
        let loc = self.next_location;
        self.next_location += 1;
        loc
    }
}

pub fn replay(session: &mut Session, events: &[Event]) -> Replay {
    let mut replay = Replay::default();
    let table = session.table_mut();

    for event in events {
        match *event {
            Event::Enter { scope, parent } => {
                table.declare_scope(scope, parent);
            }
            Event::Declare { scope, name, ty, line } => {
                let loc = if table.lookup_excluding_parent(scope, name) == NOT_FOUND {
                    replay.allocate()
                } else {
                    // ignored for an existing record
                    replay.next_location
                };
                table.insert(scope, name, ty, line, loc);
            }
            Event::Use { scope, name, line } => {
                let declared = table
                    .resolve_with_scope(scope, name)
                    .map(|(owner, record)| (owner.name().to_string(), *record.ty(), record.location()));
                match declared {
                    Some((owner, ty, loc)) => table.insert(&owner, name, ty, line, loc),
                    None => replay.undeclared.push((name.to_string(), line)),
                }
            }
        }
    }
    replay
}

/// Replay `events` into a fresh default session
pub fn session_from(events: &[Event]) -> (Session, Replay) {
    let mut session = Session::new(symtab::SymtabConfig::default());
    let replay = replay(&mut session, events);
    (session, replay)
}

/// Render the session's listing as a string
pub fn listing_of(session: &Session) -> String {
    let mut out = Vec::new();
    session.dump(&mut out).expect("writing to a Vec cannot fail");
    String::from_utf8(out).expect("listing is UTF-8")
}
