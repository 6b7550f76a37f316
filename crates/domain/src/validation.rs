// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::{NightlyRate, RoomInput, RoomType, UserInput};

/// Validates the fields of a room submitted by an administrator.
///
///
/// # Arguments
///
/// * `room` - The room fields to validate
///
/// # Errors
///
/// Returns an error if:
/// - The title is empty after trimming
/// - The price is negative or not finite
/// - Any image URL is blank
/// - The room type is not one the hotel offers
pub fn validate_room_input(room: &RoomInput) -> Result<(), DomainError> {
    // Rule: title must not be blank
    if room.title.trim().is_empty() {
        return Err(DomainError::InvalidRoomTitle(String::from(
            "Title cannot be empty",
        )));
    }

    // Rule: price must be usable as a nightly rate
    NightlyRate::new(room.price)?;

    // Rule: room type must be a known category
    if room.room_type == RoomType::Unknown {
        return Err(DomainError::InvalidRoomType(String::from(
            room.room_type.as_str(),
        )));
    }

    // Rule: image entries must be non-blank
    if room.images.iter().any(|url| url.trim().is_empty()) {
        return Err(DomainError::InvalidRoomImage(String::from(
            "Image URLs cannot be blank",
        )));
    }

    Ok(())
}

/// Validates the fields of an account created by an administrator.
///
/// # Errors
///
/// Returns an error if:
/// - The email is blank, has no `@`, or has nothing on either side of it
/// - The password is empty
pub fn validate_user_input(user: &UserInput) -> Result<(), DomainError> {
    let email: &str = user.email.trim();
    let well_formed: bool = email
        .split_once('@')
        .is_some_and(|(local, domain)| !local.is_empty() && !domain.is_empty());
    if !well_formed {
        return Err(DomainError::InvalidEmail(format!(
            "'{email}' is not an email address"
        )));
    }

    if user.password.is_empty() {
        return Err(DomainError::InvalidPassword(String::from(
            "Password cannot be empty",
        )));
    }

    Ok(())
}
