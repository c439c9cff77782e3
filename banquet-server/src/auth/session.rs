//! 会话令牌服务

use std::sync::Arc;

use dashmap::DashMap;
use rand::Rng;

/// 会话有效期：12 小时
const SESSION_TTL_MS: i64 = 12 * 60 * 60 * 1000;

/// 已认证的管理员会话，由 [`super::authenticate`] 注入请求扩展
#[derive(Clone, Debug)]
pub struct AdminSession {
    pub token: String,
}

/// 管理员会话令牌表
///
/// DashMap 无锁并发；令牌是 16 字节随机数的 hex 编码，
/// 过期令牌在下次校验时惰性清除。
#[derive(Clone, Debug, Default)]
pub struct SessionService {
    tokens: Arc<DashMap<String, i64>>,
}

impl SessionService {
    pub fn new() -> Self {
        Self::default()
    }

    /// 签发新令牌
    pub fn issue(&self) -> String {
        let mut bytes = [0u8; 16];
        rand::thread_rng().fill(&mut bytes[..]);
        let token = hex::encode(bytes);
        self.tokens.insert(token.clone(), now_millis());
        token
    }

    /// 校验令牌；过期的顺手移除
    pub fn validate(&self, token: &str) -> bool {
        let issued_at = self.tokens.get(token).map(|entry| *entry);
        match issued_at {
            Some(at) if now_millis() - at < SESSION_TTL_MS => true,
            Some(_) => {
                self.tokens.remove(token);
                false
            }
            None => false,
        }
    }

    /// 吊销令牌；令牌本就无效时返回 false
    pub fn revoke(&self, token: &str) -> bool {
        self.tokens.remove(token).is_some()
    }
}

fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issued_tokens_validate_until_revoked() {
        let sessions = SessionService::new();
        let token = sessions.issue();
        assert_eq!(token.len(), 32);
        assert!(sessions.validate(&token));
        assert!(sessions.revoke(&token));
        assert!(!sessions.validate(&token));
        assert!(!sessions.revoke(&token));
    }

    #[test]
    fn unknown_tokens_fail() {
        let sessions = SessionService::new();
        assert!(!sessions.validate("deadbeef"));
    }

    #[test]
    fn tokens_are_unique() {
        let sessions = SessionService::new();
        assert_ne!(sessions.issue(), sessions.issue());
    }
}
