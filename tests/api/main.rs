mod health_check;
mod helpers;
mod waitlist_form;
