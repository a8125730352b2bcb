//! User repository: the in-memory identity store

use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier, password_hash::SaltString};
use common::{StoreError, StoreResult};
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{error, info};

use crate::models::user::{NewUser, User};
use crate::validation::validate_new_user;

/// Error message for a duplicate registration
pub const USER_EXISTS: &str = "User already exists";

/// Error message for any failed login, whichever part was wrong
pub const INVALID_CREDENTIALS: &str = "Invalid credentials";

/// User repository
///
/// Users are keyed by email. Ids come from a counter that only moves forward,
/// so an id is never handed out twice during the life of the process.
#[derive(Clone)]
pub struct UserRepository {
    users: Arc<DashMap<String, User>>,
    emails_by_id: Arc<DashMap<String, String>>,
    next_id: Arc<AtomicU64>,
}

impl UserRepository {
    /// Create an empty user repository
    pub fn new() -> Self {
        Self {
            users: Arc::new(DashMap::new()),
            emails_by_id: Arc::new(DashMap::new()),
            next_id: Arc::new(AtomicU64::new(1)),
        }
    }

    /// Register a new user
    pub fn register(&self, new_user: &NewUser) -> StoreResult<User> {
        validate_new_user(new_user)?;

        // Fast path only; uniqueness is enforced by the entry below.
        if self.users.contains_key(&new_user.email) {
            return Err(StoreError::conflict(USER_EXISTS));
        }

        let password_hash = hash_password(&new_user.password)?;

        match self.users.entry(new_user.email.clone()) {
            Entry::Occupied(_) => Err(StoreError::conflict(USER_EXISTS)),
            Entry::Vacant(slot) => {
                let id = self.next_id.fetch_add(1, Ordering::Relaxed).to_string();
                let user = User {
                    id: id.clone(),
                    name: new_user.name.clone(),
                    email: new_user.email.clone(),
                    password_hash,
                };
                self.emails_by_id.insert(id, user.email.clone());
                slot.insert(user.clone());

                info!("Registered user {}", user.id);
                Ok(user)
            }
        }
    }

    /// Check an email and password pair
    pub fn authenticate(&self, email: &str, password: &str) -> StoreResult<User> {
        let user = self
            .find_by_email(email)
            .ok_or_else(|| StoreError::unauthorized(INVALID_CREDENTIALS))?;

        if !verify_password(&user, password) {
            return Err(StoreError::unauthorized(INVALID_CREDENTIALS));
        }

        Ok(user)
    }

    /// Find a user by email
    pub fn find_by_email(&self, email: &str) -> Option<User> {
        self.users.get(email).map(|user| user.clone())
    }

    /// Find a user by ID
    pub fn find_by_id(&self, id: &str) -> Option<User> {
        let email = self.emails_by_id.get(id)?.clone();
        self.find_by_email(&email)
    }

    /// Number of registered users
    pub fn count(&self) -> usize {
        self.users.len()
    }
}

impl Default for UserRepository {
    fn default() -> Self {
        Self::new()
    }
}

fn hash_password(password: &str) -> StoreResult<String> {
    let salt = SaltString::generate(&mut rand::thread_rng());
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| {
            error!("Failed to hash password: {}", e);
            StoreError::invalid_input("Password cannot be used")
        })
}

/// The single point where a credential is compared
fn verify_password(user: &User, password: &str) -> bool {
    match PasswordHash::new(&user.password_hash) {
        Ok(parsed_hash) => Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok(),
        Err(e) => {
            error!("Stored password hash for user {} is unreadable: {}", user.id, e);
            false
        }
    }
}
