use crossbeam_channel::bounded;
use rayon::prelude::*;
use std::num::NonZeroUsize;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;
use tracing::{debug, info};

use super::matcher::AnagramQuery;
use crate::results::MatchList;
use crate::wordlist::WordList;

/// Buffer slots in the channel between matching tasks and the collector.
/// A full buffer is the only point at which a matching task blocks.
const RESULT_BUFFER: usize = 256;

/// Runs `query` against every word in `wordlist` and collects the matches.
///
/// The word list is split into chunks sized by `thread_count` and matched
/// on the worker pool; accepted words are published on a bounded channel
/// and drained into the returned
/// [`MatchList`] by a dedicated consumer. The channel closes once the last
/// matching task drops its sender, so the consumer sees exactly the
/// published matches and then stops.
///
/// Matches arrive in scheduling order, not word-list order; callers that
/// need a deterministic order must sort the result.
pub fn solve(query: &AnagramQuery, wordlist: &WordList, thread_count: NonZeroUsize) -> MatchList {
    info!("Matching against {} candidate words", wordlist.len());

    let matches = MatchList::new();
    let accepted = AtomicUsize::new(0);
    let (sender, receiver) = bounded::<String>(RESULT_BUFFER);

    let chunk_size = (wordlist.len() / thread_count.get()).clamp(16, 256);

    thread::scope(|scope| {
        let matches = &matches;
        scope.spawn(move || {
            for word in receiver.iter() {
                matches.append(word);
            }
        });

        wordlist
            .words()
            .par_chunks(chunk_size)
            .for_each_with(sender, |sender, chunk| {
                for candidate in chunk {
                    if query.matches(candidate) {
                        accepted.fetch_add(1, Ordering::Relaxed);
                        // The consumer holds the receiver until every sender
                        // is dropped; a send only fails if the consumer
                        // thread died, and there is nothing useful to do then.
                        let _ = sender.send(candidate.clone());
                    }
                }
            });
    });

    debug!(
        "Matched {} of {} candidates",
        accepted.load(Ordering::Relaxed),
        wordlist.len()
    );

    matches
}
