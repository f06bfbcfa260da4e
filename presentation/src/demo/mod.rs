//! Simulated session
//!
//! Runs a whole session with `N` simulated participants acting at the same
//! time. Every participant tries to submit one idea more than the quota
//! allows, then everyone votes at random each round until three winners
//! are settled.

use crate::output::console::ConsoleFormatter;
use idea_application::{RunSessionError, RunSessionUseCase};
use idea_domain::{
    ErrorKind, IdeaId, OutputFormat, Participant, ParticipantId, SessionId, SessionRepository,
    SessionSnapshot,
};
use rand::seq::SliceRandom;
use serde::Serialize;
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

const IDEA_POOL: &[&str] = &[
    "Board game night",
    "Picnic in the park",
    "Escape room",
    "Cooking class",
    "Karaoke evening",
    "Hiking trip",
    "Bowling league",
    "Museum visit",
    "Volunteer day",
    "Pottery workshop",
    "Trivia quiz",
    "Movie marathon",
];

/// Outcome of a simulated session
#[derive(Debug, Clone, Serialize)]
pub struct DemoReport {
    pub participants: usize,
    /// Submissions turned away for exceeding the quota
    pub rejected_ideas: usize,
    /// Voting rounds needed to settle the winners
    pub rounds: u32,
    pub snapshot: SessionSnapshot,
}

impl DemoReport {
    /// Render the report in the selected output format
    pub fn render(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Text => format!(
                "{}\n{} participants, {} rounds, {} over-quota ideas rejected\n",
                ConsoleFormatter::format(&self.snapshot),
                self.participants,
                self.rounds,
                self.rejected_ideas
            ),
            OutputFormat::Json => {
                serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
            }
        }
    }
}

/// Drives a simulated session through a [`RunSessionUseCase`]
pub struct DemoRunner<R: SessionRepository + 'static> {
    use_case: RunSessionUseCase<R>,
}

impl<R: SessionRepository + 'static> DemoRunner<R> {
    pub fn new(use_case: RunSessionUseCase<R>) -> Self {
        Self { use_case }
    }

    /// Run a session with `participants` members, owner included
    pub async fn run(&self, participants: usize) -> Result<DemoReport, RunSessionError> {
        let owner = Participant::named("Host")?;
        let owner_id = owner.id;
        let session_id = self.use_case.create_session(owner).await?.id;

        let mut members = vec![owner_id];
        members.extend(self.join_guests(session_id, participants).await?);
        self.use_case.start_session(session_id, owner_id).await?;

        let rejected_ideas = self.submit_ideas(session_id, &members).await?;
        self.use_case.begin_voting(session_id, owner_id).await?;

        let snapshot = self.vote_until_complete(session_id, &members).await?;
        info!(
            "Demo session {} completed after {} rounds",
            session_id, snapshot.current_round
        );
        Ok(DemoReport {
            participants: members.len(),
            rejected_ideas,
            rounds: snapshot.current_round,
            snapshot,
        })
    }

    async fn join_guests(
        &self,
        session_id: SessionId,
        participants: usize,
    ) -> Result<Vec<ParticipantId>, RunSessionError> {
        let mut join_set = JoinSet::new();
        for n in 1..participants {
            let use_case = self.use_case.clone();
            join_set.spawn(async move {
                let guest = Participant::named(&format!("Guest {}", n))?;
                let id = guest.id;
                use_case.join_session(session_id, guest).await?;
                Ok::<_, RunSessionError>(id)
            });
        }

        let mut guests = Vec::new();
        while let Some(joined) = join_set.join_next().await {
            match joined {
                Ok(result) => guests.push(result?),
                Err(e) => warn!("Join task failed: {}", e),
            }
        }
        Ok(guests)
    }

    /// Everyone submits quota + 1 ideas at once; returns the rejections
    async fn submit_ideas(
        &self,
        session_id: SessionId,
        members: &[ParticipantId],
    ) -> Result<usize, RunSessionError> {
        let quota = self
            .use_case
            .get_session_snapshot(session_id)
            .await?
            .idea_quota
            .unwrap_or_default();

        let mut join_set = JoinSet::new();
        for (m, member) in members.iter().enumerate() {
            for k in 0..=quota {
                let use_case = self.use_case.clone();
                let author = *member;
                let text = format!("{} #{}", IDEA_POOL[(m * 3 + k) % IDEA_POOL.len()], m + 1);
                join_set.spawn(async move { use_case.submit_idea(session_id, author, &text).await });
            }
        }

        let mut rejected = 0;
        while let Some(joined) = join_set.join_next().await {
            match joined {
                Ok(Ok(_)) => {}
                Ok(Err(e)) if e.kind() == Some(ErrorKind::QuotaExceeded) => rejected += 1,
                Ok(Err(e)) => return Err(e),
                Err(e) => warn!("Submission task failed: {}", e),
            }
        }
        debug!("{} submissions rejected over quota", rejected);
        Ok(rejected)
    }

    async fn vote_until_complete(
        &self,
        session_id: SessionId,
        members: &[ParticipantId],
    ) -> Result<SessionSnapshot, RunSessionError> {
        loop {
            let snapshot = self.use_case.get_session_snapshot(session_id).await?;
            if snapshot.is_completed() {
                return Ok(snapshot);
            }

            let candidates: Vec<IdeaId> = snapshot.candidates.iter().map(|c| c.id).collect();
            let required = snapshot.required_votes.unwrap_or_default();
            debug!(
                "Round {}: {} candidates, {} picks each",
                snapshot.current_round,
                candidates.len(),
                required
            );

            let mut join_set = JoinSet::new();
            for voter in members {
                let selection = random_selection(&candidates, required);
                let use_case = self.use_case.clone();
                let voter = *voter;
                join_set.spawn(async move { use_case.submit_vote(session_id, voter, selection).await });
            }
            while let Some(joined) = join_set.join_next().await {
                match joined {
                    Ok(result) => {
                        result?;
                    }
                    Err(e) => warn!("Vote task failed: {}", e),
                }
            }
        }
    }
}

fn random_selection(candidates: &[IdeaId], count: usize) -> Vec<IdeaId> {
    let mut rng = rand::thread_rng();
    candidates
        .choose_multiple(&mut rng, count)
        .copied()
        .collect()
}
