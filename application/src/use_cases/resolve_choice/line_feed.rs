//! Ticketed access to the shared blocking input.
//!
//! The [`InputSource`] lives on a dedicated "input pump" thread. The pump
//! reads only on demand: each request carries the [`ReadTicket`] of the
//! invocation that issued it, and the line it produces comes back tagged
//! with that same ticket. At most one read is in flight at a time.
//!
//! ```text
//!  resolver task                         input-pump thread
//!  ─────────────                         ─────────────────
//!  next_event(#3) ── request(#3) ──────▶ read_line()  (blocks)
//!       ⋮ deadline wins, round #3 ends        ⋮
//!  next_event(#4)  (read still in flight)     ⋮
//!       ◀──────────── TaggedLine(#3, "B") ── returns
//!  → FeedEvent::Late   (never an answer for #4)
//!  next_event(#4) ── request(#4) ──────▶ read_line()
//! ```

use crate::ports::input_source::InputSource;
use quiz_domain::{LateLine, ReadTicket};
use std::io;
use std::sync::mpsc as std_mpsc;
use tokio::sync::mpsc;
use tracing::{debug, trace, warn};

/// What the pump produced for one read request
#[derive(Debug)]
enum PumpEvent {
    Line(String),
    Exhausted,
}

#[derive(Debug)]
struct TaggedLine {
    ticket: ReadTicket,
    event: PumpEvent,
}

/// Result of waiting on the feed for one invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedEvent {
    /// A line read on behalf of the waiting invocation
    Line(String),
    /// A line read on behalf of an earlier invocation; must be discarded
    Late(LateLine),
    /// The source is closed; every later call returns this immediately
    Exhausted,
}

/// Shared sequential reader over an [`InputSource`].
///
/// Dropping the feed stops the pump as soon as it is not blocked inside
/// `read_line`; a read that is blocked on an uncancellable source is left
/// outstanding and its result is thrown away.
pub struct LineFeed {
    requests: std_mpsc::Sender<ReadTicket>,
    replies: mpsc::UnboundedReceiver<TaggedLine>,
    in_flight: Option<ReadTicket>,
    last_ticket: ReadTicket,
    exhausted: bool,
}

impl LineFeed {
    /// Move `source` onto a new pump thread
    pub fn spawn<S: InputSource>(source: S) -> io::Result<Self> {
        let (request_tx, request_rx) = std_mpsc::channel();
        let (reply_tx, reply_rx) = mpsc::unbounded_channel();

        std::thread::Builder::new()
            .name("input-pump".to_string())
            .spawn(move || pump(source, request_rx, reply_tx))?;

        Ok(Self {
            requests: request_tx,
            replies: reply_rx,
            in_flight: None,
            last_ticket: ReadTicket::new(0),
            exhausted: false,
        })
    }

    /// Mint the ticket for a new invocation.
    ///
    /// Tickets increase strictly, so any reply carrying an older ticket
    /// belongs to an invocation that has already returned.
    pub fn begin(&mut self) -> ReadTicket {
        self.last_ticket = self.last_ticket.next();
        self.last_ticket
    }

    /// Feed whose next invocation already has a completed read waiting:
    /// the read was issued for ticket #1 and `text` is queued but not yet
    /// received. No pump thread is involved.
    #[cfg(test)]
    pub(crate) fn with_completed_read(text: &str) -> Self {
        let (requests, _) = std_mpsc::channel();
        let (reply_tx, replies) = mpsc::unbounded_channel();
        let issued = ReadTicket::new(1);
        let _ = reply_tx.send(TaggedLine {
            ticket: issued,
            event: PumpEvent::Line(text.to_string()),
        });

        Self {
            requests,
            replies,
            in_flight: Some(issued),
            last_ticket: ReadTicket::new(0),
            exhausted: false,
        }
    }

    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Ticket of the read currently blocked in the pump, if any
    pub fn read_in_flight(&self) -> Option<ReadTicket> {
        self.in_flight
    }

    /// Wait for the next event on behalf of `ticket`.
    ///
    /// Cancel-safe: if the returned future is dropped (e.g. the deadline
    /// won a `select!`), the issued read stays in flight and its line will
    /// surface later as [`FeedEvent::Late`].
    pub async fn next_event(&mut self, ticket: ReadTicket) -> FeedEvent {
        if self.exhausted {
            return FeedEvent::Exhausted;
        }

        if self.in_flight.is_none() {
            if self.requests.send(ticket).is_err() {
                debug!("Input pump has stopped");
                self.exhausted = true;
                return FeedEvent::Exhausted;
            }
            trace!("Issued read for invocation {}", ticket);
            self.in_flight = Some(ticket);
        }

        let Some(reply) = self.replies.recv().await else {
            self.exhausted = true;
            return FeedEvent::Exhausted;
        };
        self.in_flight = None;

        match reply.event {
            // Closed is closed, whichever invocation saw it first
            PumpEvent::Exhausted => {
                self.exhausted = true;
                FeedEvent::Exhausted
            }
            PumpEvent::Line(text) if reply.ticket == ticket => FeedEvent::Line(text),
            PumpEvent::Line(text) => {
                debug!(
                    "Discarding line read for invocation {} while {} was waiting",
                    reply.ticket, ticket
                );
                FeedEvent::Late(LateLine {
                    issued_by: reply.ticket,
                    observed_by: ticket,
                    text,
                })
            }
        }
    }
}

fn pump<S: InputSource>(
    mut source: S,
    requests: std_mpsc::Receiver<ReadTicket>,
    replies: mpsc::UnboundedSender<TaggedLine>,
) {
    while let Ok(ticket) = requests.recv() {
        let event = match source.read_line() {
            Ok(Some(line)) => PumpEvent::Line(line),
            Ok(None) => {
                debug!("Input source closed");
                PumpEvent::Exhausted
            }
            Err(e) => {
                warn!("Input read failed, treating source as closed: {}", e);
                PumpEvent::Exhausted
            }
        };

        let closed = matches!(event, PumpEvent::Exhausted);
        if replies.send(TaggedLine { ticket, event }).is_err() || closed {
            break;
        }
    }
    trace!("Input pump exiting");
}
