/// Request middleware
///
/// - `auth`: JWT bearer authentication for the resource routes

pub mod auth;
