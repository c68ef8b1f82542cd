use crate::modules::user::handle::*;
use actix_web::web::{ServiceConfig, scope};

pub fn configure(cfg: &mut ServiceConfig) {
    cfg.service(
        scope("/users")
            .service(create_user)
            .service(update_user)
            .service(list_users)
            .service(get_user)
            .service(add_friend)
            .service(remove_friend)
            .service(list_friends)
            .service(list_common_friends),
    );
}
