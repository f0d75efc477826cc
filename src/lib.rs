pub mod member;
mod parse_member_lists;
mod parse_util;
