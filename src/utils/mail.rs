use crate::config::config;
use crate::site::ACADEMY_NAME;
use crate::types::consult::Consultation;
use crate::types::mail::SendEmail;
use reqwest::{Client, ClientBuilder};
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// Sends through Resend. `Ok(None)` when mail is not configured.
pub async fn send_email(email: SendEmail) -> Result<Option<String>, String> {
    let Some(api_key) = config().mail.resend_key.as_deref() else {
        info!(subject = %email.subject, "mail disabled, skipping");
        return Ok(None);
    };
    if email.to.is_empty() {
        return Ok(None);
    }

    let client: Client = ClientBuilder::new()
        .user_agent("academy-portal/1.0 (+reqwest)")
        .tcp_nodelay(true)
        .pool_idle_timeout(Duration::from_secs(30))
        .timeout(Duration::from_secs(30))
        .build()
        .map_err(|e| format!("build client failed: {e}"))?;

    let t0 = Instant::now();
    let res = client
        .post(&config().mail.api_url)
        .bearer_auth(api_key) // do NOT log the key
        .json(&email)
        .send()
        .await
        .map_err(|e| format!("send failed: {e}"))?;

    let status = res.status();
    let body = res.text().await.map_err(|e| format!("read body failed: {e}"))?;
    info!(%status, elapsed_ms = t0.elapsed().as_millis() as u64, subject = %email.subject, "mail sent");

    if status.is_success() {
        Ok(Some(body))
    } else {
        Err(format!("Resend API error: HTTP {status}: {body}"))
    }
}

/// Fire-and-forget: the caller's response never waits on the mail API.
pub fn notify_password_changed(to: String, display_name: String) {
    actix_web::rt::spawn(async move { mail_password_changed(&to, &display_name).await });
}

pub fn notify_consult_received(consult: Consultation) {
    actix_web::rt::spawn(async move { mail_consult_received(&consult).await });
}

async fn mail_password_changed(to: &str, display_name: &str) {
    let result = send_email(SendEmail {
        from: config().mail.from.clone(),
        to: vec![to.to_string()],
        subject: format!("{ACADEMY_NAME} 비밀번호 변경 안내"),
        text: Some(format!(
            "{display_name}님, 계정 비밀번호가 변경되었습니다.\n\
             본인이 변경하지 않았다면 학원으로 바로 연락해주세요."
        )),
        ..Default::default()
    })
    .await;

    if let Err(e) = result {
        warn!(error = %e, "password change mail failed");
    }
}

async fn mail_consult_received(consult: &Consultation) {
    let cfg = &config().mail;
    if cfg.consult_notify_to.is_empty() {
        return;
    }

    let result = send_email(SendEmail {
        from: cfg.from.clone(),
        to: cfg.consult_notify_to.clone(),
        subject: format!("[{ACADEMY_NAME} 상담 신청] {}", consult.parent_name),
        text: Some(consult_summary(consult)),
        reply_to: consult.email.clone().map(|e| vec![e]),
        ..Default::default()
    })
    .await;

    if let Err(e) = result {
        warn!(error = %e, consultation_id = %consult.id, "consultation mail failed");
    }
}

fn consult_summary(c: &Consultation) -> String {
    let dash = "-".to_string();
    [
        format!("신청 경로: {}", c.source),
        format!("신청자: {}", c.parent_name),
        format!("자녀 이름: {}", c.child_name.as_ref().unwrap_or(&dash)),
        format!("자녀 연령/학년: {}", c.child_age.as_ref().unwrap_or(&dash)),
        format!("연락처: {}", c.phone),
        format!("이메일: {}", c.email.as_ref().unwrap_or(&dash)),
        format!("관심 프로그램: {}", c.program.as_ref().unwrap_or(&dash)),
        String::new(),
        c.message.clone().unwrap_or_default(),
    ]
    .join("\n")
}
