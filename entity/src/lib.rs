pub mod consultation;
pub mod notice;
pub mod session;
pub mod user;

/*
 Users sign up with email + password and start with the `user` role.
 Admins are promoted by another admin (or by the bootstrap email at signup)
 and are the only ones allowed to write notices and read consultations.
 Sessions are opaque bearer tokens; only an argon2 hash of the secret half
 is stored here.
 */
