use crate::mpris::MprisHandle;
use crate::player::Player;

pub fn update_mpris(mpris: &MprisHandle, player: &Player) {
    mpris.set_track_metadata(Some(player.current_track()));
    mpris.set_mode(player.mode());
    mpris.set_toggles(player.shuffle_on, player.repeat_on);
}
