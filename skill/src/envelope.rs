//! The voice platform's JSON request and response envelopes, reduced to the fields this skill
//! reads or writes.

use std::collections::HashMap;

use serde::{
    Serialize,
    Deserialize,
};

#[derive(Debug, Clone, Deserialize)]
pub struct SkillRequest{
    #[serde(default)]
    pub session: Option<Session>,
    pub request: RequestBody,
}

impl SkillRequest{
    #[must_use] pub fn application_id(&self) -> Option<&str>{
        self.session.as_ref()?
            .application.as_ref()
            .map(|application| application.application_id.as_str())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Session{
    #[serde(default)]
    pub application: Option<Application>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application{
    pub application_id: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub enum RequestBody{
    LaunchRequest,
    IntentRequest{
        intent: Intent,
    },
    SessionEndedRequest,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Intent{
    pub name: String,
    #[serde(default)]
    pub slots: HashMap<String, Slot>,
}

impl Intent{
    /// The spoken value of a slot, if the user filled it
    #[must_use] pub fn slot_value(&self, name: &str) -> Option<&str>{
        self.slots.get(name)?.value.as_deref()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Slot{
    #[serde(default)]
    pub value: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillResponse{
    pub version: &'static str,
    pub response: ResponseBody,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseBody{
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_speech: Option<OutputSpeech>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card: Option<Card>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reprompt: Option<Reprompt>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub should_end_session: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputSpeech{
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub ssml: String,
}

impl OutputSpeech{
    fn ssml(speech: &str) -> Self{
        Self{
            kind: "SSML",
            ssml: format!("<speak>{speech}</speak>"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Card{
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Reprompt{
    pub output_speech: OutputSpeech,
}

impl SkillResponse{
    fn with_body(response: ResponseBody) -> Self{
        Self{
            version: "1.0",
            response,
        }
    }

    /// Says something and ends the session
    #[must_use] pub fn tell(speech: &str) -> Self{
        Self::with_body(ResponseBody{
            output_speech: Some(OutputSpeech::ssml(speech)),
            should_end_session: Some(true),
            ..Default::default()
        })
    }

    #[must_use] pub fn tell_with_card(speech: &str, title: &str, content: &str) -> Self{
        let mut response = Self::tell(speech);
        response.response.card = Some(Card{
            kind: "Simple",
            title: title.to_string(),
            content: content.to_string(),
        });
        response
    }

    /// Says something and waits for the user to answer
    #[must_use] pub fn ask(speech: &str, reprompt: &str) -> Self{
        Self::with_body(ResponseBody{
            output_speech: Some(OutputSpeech::ssml(speech)),
            reprompt: Some(Reprompt{ output_speech: OutputSpeech::ssml(reprompt) }),
            should_end_session: Some(false),
            ..Default::default()
        })
    }

    #[must_use] pub fn empty() -> Self{
        Self::with_body(ResponseBody::default())
    }

    #[must_use] pub fn ends_session(&self) -> bool{
        self.response.should_end_session.unwrap_or(true)
    }
}
