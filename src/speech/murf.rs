use std::time::Duration;

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, error, info, warn};

use crate::config::SpeechSettings;
use crate::http_client::{self, RetryAction, RetryConfig};

use super::SpeechSynthesizer;

/// Largest audio body accepted from the service.
const MAX_AUDIO_BYTES: usize = 10 * 1024 * 1024;
const DEFAULT_BACKOFF_BASE: Duration = Duration::from_secs(1);
const MAX_BACKOFF: Duration = Duration::from_secs(30);

/// Why one synthesis attempt failed.
#[derive(Debug, Error)]
pub enum SpeechError {
    #[error("Speech API key is not configured")]
    MissingApiKey,
    #[error("Speech service rejected the API key")]
    Unauthorized,
    #[error("Speech service rate limit exceeded")]
    RateLimited,
    #[error("Speech service returned HTTP {0}")]
    Status(u16),
    #[error("Speech request failed: {0}")]
    Transport(String),
    #[error("Failed to read speech audio: {0}")]
    Body(std::io::Error),
}

impl SpeechError {
    fn retry_action(&self) -> RetryAction {
        match self {
            Self::MissingApiKey | Self::Unauthorized | Self::Body(_) => RetryAction::Stop,
            Self::RateLimited => RetryAction::Backoff,
            Self::Status(_) | Self::Transport(_) => RetryAction::Immediately,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SynthesisRequest<'a> {
    voice_id: &'a str,
    style: &'a str,
    text: &'a str,
    rate: i32,
    pitch: i32,
    sample_rate: u32,
    format: &'a str,
    channel_type: &'a str,
}

/// Client for a Murf-style `speech/generate` endpoint.
#[derive(Debug, Clone)]
pub struct MurfClient {
    settings: SpeechSettings,
    backoff_base: Duration,
}

impl MurfClient {
    pub fn new(settings: SpeechSettings) -> Self {
        Self {
            settings,
            backoff_base: DEFAULT_BACKOFF_BASE,
        }
    }

    /// Override the first rate-limit backoff delay.
    pub fn with_backoff_base(mut self, delay: Duration) -> Self {
        self.backoff_base = delay;
        self
    }

    /// Synthesize `text`, reporting why the last attempt failed.
    pub fn try_synthesize(&self, text: &str) -> Result<Vec<u8>, SpeechError> {
        let api_key = self.settings.api_key().ok_or(SpeechError::MissingApiKey)?;
        let retry = RetryConfig {
            max_attempts: self.settings.retries as usize + 1,
            base_delay: self.backoff_base,
            max_delay: MAX_BACKOFF,
        };
        http_client::retry_with_backoff(
            retry,
            |attempt| {
                debug!("Speech request attempt {attempt}");
                self.request_once(api_key, text)
            },
            |err| {
                warn!("{err}");
                err.retry_action()
            },
        )
    }

    fn request_once(&self, api_key: &str, text: &str) -> Result<Vec<u8>, SpeechError> {
        let payload = SynthesisRequest {
            voice_id: &self.settings.voice_id,
            style: &self.settings.style,
            text,
            rate: 0,
            pitch: 0,
            sample_rate: self.settings.sample_rate,
            format: &self.settings.format,
            channel_type: "MONO",
        };
        let response = http_client::agent()
            .post(&self.settings.endpoint)
            .set("api-key", api_key)
            .set("Accept", "application/json")
            .timeout(self.settings.timeout())
            .send_json(&payload)
            .map_err(|err| match err {
                ureq::Error::Status(401, _) => SpeechError::Unauthorized,
                ureq::Error::Status(429, _) => SpeechError::RateLimited,
                ureq::Error::Status(code, _) => SpeechError::Status(code),
                ureq::Error::Transport(transport) => SpeechError::Transport(transport.to_string()),
            })?;
        if response.status() != 200 {
            return Err(SpeechError::Status(response.status()));
        }
        http_client::read_response_bytes(response, MAX_AUDIO_BYTES).map_err(SpeechError::Body)
    }
}

impl SpeechSynthesizer for MurfClient {
    fn synthesize(&self, text: &str) -> Option<Vec<u8>> {
        match self.try_synthesize(text) {
            Ok(audio) => {
                info!("Synthesized {} bytes of speech", audio.len());
                Some(audio)
            }
            Err(SpeechError::MissingApiKey) => {
                error!("Speech API key not configured; skipping synthesis");
                None
            }
            Err(err) => {
                error!("Speech synthesis failed: {err}");
                None
            }
        }
    }

    fn is_available(&self) -> bool {
        self.settings.api_key().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::sync::mpsc;
    use std::thread;

    /// Serve canned responses in order, forwarding each raw request.
    fn serve(responses: Vec<String>) -> (String, mpsc::Receiver<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            for response in responses {
                let Ok((mut stream, _)) = listener.accept() else {
                    return;
                };
                let request = read_request(&mut stream);
                let _ = tx.send(request);
                let _ = stream.write_all(response.as_bytes());
            }
        });
        (format!("http://{addr}/v1/speech/generate"), rx)
    }

    fn read_request(stream: &mut std::net::TcpStream) -> String {
        let mut data = Vec::new();
        let mut buf = [0u8; 4096];
        loop {
            let read = stream.read(&mut buf).unwrap_or(0);
            if read == 0 {
                break;
            }
            data.extend_from_slice(&buf[..read]);
            let text = String::from_utf8_lossy(&data);
            if let Some(header_end) = text.find("\r\n\r\n") {
                let body_len = text[..header_end]
                    .lines()
                    .find_map(|line| {
                        let (name, value) = line.split_once(':')?;
                        name.eq_ignore_ascii_case("content-length")
                            .then(|| value.trim().parse::<usize>().ok())
                            .flatten()
                    })
                    .unwrap_or(0);
                if data.len() >= header_end + 4 + body_len {
                    break;
                }
            }
        }
        String::from_utf8_lossy(&data).into_owned()
    }

    fn reply(status: &str, body: &str) -> String {
        format!(
            "HTTP/1.1 {status}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        )
    }

    fn client(endpoint: String, retries: u32) -> MurfClient {
        MurfClient::new(SpeechSettings {
            api_key: Some("test-key".into()),
            endpoint,
            retries,
            ..SpeechSettings::default()
        })
        .with_backoff_base(Duration::ZERO)
    }

    #[test]
    fn success_returns_body_and_sends_payload() {
        let (url, rx) = serve(vec![reply("200 OK", "ID3audio")]);
        let audio = client(url, 2).synthesize("Feed me!").unwrap();
        assert_eq!(audio, b"ID3audio");
        let request = rx.recv().unwrap();
        let lower = request.to_ascii_lowercase();
        assert!(lower.contains("api-key: test-key"));
        assert!(request.contains("\"voiceId\":\"en-US-1\""));
        assert!(request.contains("\"text\":\"Feed me!\""));
        assert!(request.contains("\"channelType\":\"MONO\""));
        assert!(request.contains("\"sampleRate\":48000"));
    }

    #[test]
    fn unauthorized_is_not_retried() {
        let (url, rx) = serve(vec![
            reply("401 Unauthorized", ""),
            reply("200 OK", "late"),
        ]);
        let err = client(url, 2).try_synthesize("hi").unwrap_err();
        assert!(matches!(err, SpeechError::Unauthorized));
        assert_eq!(rx.try_iter().count(), 1);
    }

    #[test]
    fn rate_limit_backs_off_then_succeeds() {
        let (url, _rx) = serve(vec![
            reply("429 Too Many Requests", ""),
            reply("200 OK", "ok"),
        ]);
        assert_eq!(client(url, 2).synthesize("hi"), Some(b"ok".to_vec()));
    }

    #[test]
    fn server_errors_exhaust_retries() {
        let (url, rx) = serve(vec![
            reply("500 Internal Server Error", ""),
            reply("503 Service Unavailable", ""),
            reply("502 Bad Gateway", ""),
        ]);
        let err = client(url, 2).try_synthesize("hi").unwrap_err();
        assert!(matches!(err, SpeechError::Status(502)));
        assert_eq!(rx.try_iter().count(), 3);
    }

    #[test]
    fn missing_key_short_circuits() {
        let client = MurfClient::new(SpeechSettings::default());
        assert!(!client.is_available());
        assert!(client.synthesize("hi").is_none());
        assert!(matches!(
            client.try_synthesize("hi"),
            Err(SpeechError::MissingApiKey)
        ));
    }

    #[test]
    fn unreachable_endpoint_yields_none() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let client = client(format!("http://{addr}/speech"), 1);
        assert!(client.synthesize("hi").is_none());
    }
}
