mod cache;

pub use cache::ResponseCache;

use crate::llm::{prompt, MentorClient, QueryError};

/// State for one interactive run: the Mentor AI client and its answer cache.
///
/// The dataset flow and the free-text flow both go through the same two
/// methods keyed by the exact name string, so an answer fetched through one
/// is visible through the other.
pub struct Session<C> {
    client: C,
    cache: ResponseCache,
}

impl<C: MentorClient> Session<C> {
    pub fn new(client: C) -> Self {
        Session {
            client,
            cache: ResponseCache::new(),
        }
    }

    /// Previously fetched answer, without touching the network.
    pub fn cached(&self, name: &str) -> Option<&str> {
        self.cache.get(name)
    }

    /// Asks the Mentor AI about `name` and stores the answer.
    ///
    /// On error the existing entry for `name`, if any, is left as it was.
    pub async fn consult(&mut self, name: &str) -> Result<String, QueryError> {
        let request = prompt::build(name);
        let text = self.client.fetch(&request).await?;
        self.cache.put(name, text.clone());
        Ok(text)
    }

    pub fn cache(&self) -> &ResponseCache {
        &self.cache
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::llm::QueryRequest;
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    /// Replays queued results and records which materials were requested.
    #[derive(Default)]
    pub(crate) struct ScriptedMentor {
        replies: Mutex<VecDeque<Result<String, QueryError>>>,
        requested: Mutex<Vec<String>>,
    }

    impl ScriptedMentor {
        pub(crate) fn replying(replies: Vec<Result<String, QueryError>>) -> Self {
            ScriptedMentor {
                replies: Mutex::new(replies.into()),
                requested: Mutex::new(Vec::new()),
            }
        }

        pub(crate) fn requested(&self) -> Vec<String> {
            self.requested.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl MentorClient for ScriptedMentor {
        async fn fetch(&self, request: &QueryRequest) -> Result<String, QueryError> {
            self.requested.lock().unwrap().push(request.material.clone());
            self.replies
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(QueryError::Transport("no scripted reply".to_string())))
        }
    }

    #[tokio::test]
    async fn test_successful_consult_is_cached_unchanged() {
        let text = "Densidad: 2400 kg/m³\n\n- Uso: muros".to_string();
        let mut session = Session::new(ScriptedMentor::replying(vec![Ok(text.clone())]));

        assert_eq!(session.cached("Concreto"), None);
        assert_eq!(session.consult("Concreto").await.unwrap(), text);
        assert_eq!(session.cached("Concreto"), Some(text.as_str()));
    }

    #[tokio::test]
    async fn test_second_consult_overwrites_first() {
        let mut session = Session::new(ScriptedMentor::replying(vec![
            Ok("primera".to_string()),
            Ok("segunda".to_string()),
        ]));

        session.consult("Concreto").await.unwrap();
        session.consult("Concreto").await.unwrap();
        assert_eq!(session.cached("Concreto"), Some("segunda"));
        assert_eq!(session.cache().len(), 1);
    }

    #[tokio::test]
    async fn test_failed_consult_leaves_cache_untouched() {
        let mut session = Session::new(ScriptedMentor::replying(vec![
            Ok("vigente".to_string()),
            Err(QueryError::Transport("connection reset by peer".to_string())),
            Err(QueryError::Transport("dns error".to_string())),
        ]));

        session.consult("Concreto").await.unwrap();

        let err = session.consult("Concreto").await.unwrap_err();
        assert!(err.to_string().contains("connection reset by peer"));
        assert_eq!(session.cached("Concreto"), Some("vigente"));

        assert!(session.consult("Adobe").await.is_err());
        assert_eq!(session.cached("Adobe"), None);
        assert_eq!(session.cache().len(), 1);
    }

    #[tokio::test]
    async fn test_flows_share_exact_name_keys() {
        let mentor = ScriptedMentor::replying(vec![Ok("ficha".to_string())]);
        let mut session = Session::new(mentor);

        // Fetched as free text, then checked through a dataset selection.
        session.consult("Concreto").await.unwrap();
        assert_eq!(session.cached("Concreto"), Some("ficha"));
        assert_eq!(session.cached("concreto"), None);
    }

    #[tokio::test]
    async fn test_client_sees_the_exact_name() {
        let mut session = Session::new(ScriptedMentor::replying(vec![Ok("x".to_string())]));
        session.consult("Bambú guadua").await.unwrap();
        assert_eq!(session.client.requested(), vec!["Bambú guadua"]);
    }

    #[tokio::test]
    async fn test_sessions_do_not_share_caches() {
        let mut first = Session::new(ScriptedMentor::replying(vec![Ok("uno".to_string())]));
        let second = Session::new(ScriptedMentor::default());

        first.consult("Adobe").await.unwrap();
        assert_eq!(first.cached("Adobe"), Some("uno"));
        assert_eq!(second.cached("Adobe"), None);
    }
}
