//! Action table for the original Neverwinter Nights engine.
//!
//! Row position is the wire ordinal. Append only; never renumber.

actions! {
    pub(crate) const NWN1_ACTIONS;

    0 Random(1) -> Int [Int]
        "int Random(int nMaxInteger);";
    1 PrintString(1) -> Void [String]
        "void PrintString(string sString);";
    2 PrintFloat(1) -> Void [Float, Int, Int]
        "void PrintFloat(float fFloat, int nWidth=18, int nDecimals=9);";
    3 FloatToString(1) -> String [Float, Int, Int]
        "string FloatToString(float fFloat, int nWidth=18, int nDecimals=9);";
    4 PrintInteger(1) -> Void [Int]
        "void PrintInteger(int nInteger);";
    5 PrintObject(1) -> Void [Object]
        "void PrintObject(object oObject);";
    6 AssignCommand(2) -> Void [Object, Action]
        "void AssignCommand(object oActionSubject, action aActionToAssign);";
    7 DelayCommand(2) -> Void [Float, Action]
        "void DelayCommand(float fSeconds, action aActionToDelay);";
    8 ExecuteScript(2) -> Void [String, Object]
        "void ExecuteScript(string sScript, object oTarget);";
    9 ClearAllActions(0) -> Void [Int]
        "void ClearAllActions(int nClearCombatState=FALSE);";
    10 SetFacing(1) -> Void [Float]
        "void SetFacing(float fDirection);";
    11 SetCalendar(3) -> Void [Int, Int, Int]
        "void SetCalendar(int nYear, int nMonth, int nDay);";
    12 SetTime(4) -> Void [Int, Int, Int, Int]
        "void SetTime(int nHour, int nMinute, int nSecond, int nMillisecond);";
    13 GetCalendarYear(0) -> Int []
        "int GetCalendarYear();";
    14 GetCalendarMonth(0) -> Int []
        "int GetCalendarMonth();";
    15 GetCalendarDay(0) -> Int []
        "int GetCalendarDay();";
    16 GetTimeHour(0) -> Int []
        "int GetTimeHour();";
    17 GetTimeMinute(0) -> Int []
        "int GetTimeMinute();";
    18 GetTimeSecond(0) -> Int []
        "int GetTimeSecond();";
    19 GetTimeMillisecond(0) -> Int []
        "int GetTimeMillisecond();";
    20 ActionRandomWalk(0) -> Void []
        "void ActionRandomWalk();";
    21 ActionMoveToLocation(1) -> Void [Location, Int]
        "void ActionMoveToLocation(location lDestination, int bRun=FALSE);";
    22 ActionMoveToObject(1) -> Void [Object, Int, Float]
        "void ActionMoveToObject(object oMoveTo, int bRun=FALSE, float fRange=1.0f);";
    23 ActionMoveAwayFromObject(1) -> Void [Object, Int, Float]
        "void ActionMoveAwayFromObject(object oFleeFrom, int bRun=FALSE, float fMoveAwayRange=40.0f);";
    24 GetArea(1) -> Object [Object]
        "object GetArea(object oTarget);";
    25 GetEnteringObject(0) -> Object []
        "object GetEnteringObject();";
    26 GetExitingObject(0) -> Object []
        "object GetExitingObject();";
    27 GetPosition(1) -> Vector [Object]
        "vector GetPosition(object oTarget);";
    28 GetFacing(1) -> Float [Object]
        "float GetFacing(object oTarget);";
    29 GetItemPossessor(1) -> Object [Object]
        "object GetItemPossessor(object oItem);";
    30 GetItemPossessedBy(2) -> Object [Object, String]
        "object GetItemPossessedBy(object oCreature, string sItemTag);";
    31 CreateItemOnObject(1) -> Object [String, Object, Int, String]
        r#"object CreateItemOnObject(string sItemTemplate, object oTarget=OBJECT_SELF, int nStackSize=1, string sNewTag="");"#;
    32 ActionEquipItem(2) -> Void [Object, Int]
        "void ActionEquipItem(object oItem, int nInventorySlot);";
    33 ActionUnequipItem(1) -> Void [Object]
        "void ActionUnequipItem(object oItem);";
    34 ActionPickUpItem(1) -> Void [Object]
        "void ActionPickUpItem(object oItem);";
    35 ActionPutDownItem(1) -> Void [Object]
        "void ActionPutDownItem(object oItem);";
    36 GetLastAttacker(0) -> Object [Object]
        "object GetLastAttacker(object oAttackee=OBJECT_SELF);";
    37 ActionAttack(1) -> Void [Object, Int]
        "void ActionAttack(object oAttackee, int bPassive=FALSE);";
    38 GetNearestCreature(2) -> Object [Int, Int, Object, Int, Int, Int, Int, Int]
        "object GetNearestCreature(int nFirstCriteriaType, int nFirstCriteriaValue, object oTarget=OBJECT_SELF, int nNth=1, int nSecondCriteriaType=-1, int nSecondCriteriaValue=-1, int nThirdCriteriaType=-1, int nThirdCriteriaValue=-1);";
    39 ActionSpeakString(1) -> Void [String, Int]
        "void ActionSpeakString(string sStringToSpeak, int nTalkVolume=TALKVOLUME_TALK);";
    40 ActionPlayAnimation(1) -> Void [Int, Float, Float]
        "void ActionPlayAnimation(int nAnimation, float fSpeed=1.0, float fDurationSeconds=0.0);";
    41 GetDistanceToObject(1) -> Float [Object]
        "float GetDistanceToObject(object oObject);";
    42 GetIsObjectValid(1) -> Int [Object]
        "int GetIsObjectValid(object oObject);";
    43 ActionOpenDoor(1) -> Void [Object]
        "void ActionOpenDoor(object oDoor);";
    44 ActionCloseDoor(1) -> Void [Object]
        "void ActionCloseDoor(object oDoor);";
    45 SetCameraFacing(1) -> Void [Float, Float, Float, Int]
        "void SetCameraFacing(float fDirection, float fDistance=-1.0f, float fPitch=-1.0, int nTransitionType=CAMERA_TRANSITION_TYPE_SNAP);";
    46 PlaySound(1) -> Void [String]
        "void PlaySound(string sSoundName);";
    47 GetSpellTargetObject(0) -> Object []
        "object GetSpellTargetObject();";
    48 ActionCastSpellAtObject(2) -> Void [Int, Object, Int, Int, Int, Int, Int]
        "void ActionCastSpellAtObject(int nSpell, object oTarget, int nMetaMagic=METAMAGIC_ANY, int bCheat=FALSE, int nDomainLevel=0, int nProjectilePathType=PROJECTILE_PATH_TYPE_DEFAULT, int bInstantSpell=FALSE);";
    49 GetCurrentHitPoints(0) -> Int [Object]
        "int GetCurrentHitPoints(object oObject=OBJECT_SELF);";
    50 GetMaxHitPoints(0) -> Int [Object]
        "int GetMaxHitPoints(object oObject=OBJECT_SELF);";
    51 GetLocalInt(2) -> Int [Object, String]
        "int GetLocalInt(object oObject, string sVarName);";
    52 GetLocalFloat(2) -> Float [Object, String]
        "float GetLocalFloat(object oObject, string sVarName);";
    53 GetLocalString(2) -> String [Object, String]
        "string GetLocalString(object oObject, string sVarName);";
    54 GetLocalObject(2) -> Object [Object, String]
        "object GetLocalObject(object oObject, string sVarName);";
    55 SetLocalInt(3) -> Void [Object, String, Int]
        "void SetLocalInt(object oObject, string sVarName, int nValue);";
    56 SetLocalFloat(3) -> Void [Object, String, Float]
        "void SetLocalFloat(object oObject, string sVarName, float fValue);";
    57 SetLocalString(3) -> Void [Object, String, String]
        "void SetLocalString(object oObject, string sVarName, string sValue);";
    58 SetLocalObject(3) -> Void [Object, String, Object]
        "void SetLocalObject(object oObject, string sVarName, object oValue);";
    59 GetStringLength(1) -> Int [String]
        "int GetStringLength(string sString);";
    60 GetStringUpperCase(1) -> String [String]
        "string GetStringUpperCase(string sString);";
    61 GetStringLowerCase(1) -> String [String]
        "string GetStringLowerCase(string sString);";
    62 GetStringRight(2) -> String [String, Int]
        "string GetStringRight(string sString, int nCount);";
    63 GetStringLeft(2) -> String [String, Int]
        "string GetStringLeft(string sString, int nCount);";
    64 InsertString(3) -> String [String, String, Int]
        "string InsertString(string sDestination, string sString, int nPosition);";
    65 GetSubString(3) -> String [String, Int, Int]
        "string GetSubString(string sString, int nStart, int nCount);";
    66 FindSubString(2) -> Int [String, String, Int]
        "int FindSubString(string sString, string sSubString, int nStart=0);";
    67 fabs(1) -> Float [Float]
        "float fabs(float fValue);";
    68 cos(1) -> Float [Float]
        "float cos(float fValue);";
    69 sin(1) -> Float [Float]
        "float sin(float fValue);";
    70 tan(1) -> Float [Float]
        "float tan(float fValue);";
    71 acos(1) -> Float [Float]
        "float acos(float fValue);";
    72 asin(1) -> Float [Float]
        "float asin(float fValue);";
    73 atan(1) -> Float [Float]
        "float atan(float fValue);";
    74 log(1) -> Float [Float]
        "float log(float fValue);";
    75 pow(2) -> Float [Float, Float]
        "float pow(float fValue, float fExponent);";
    76 sqrt(1) -> Float [Float]
        "float sqrt(float fValue);";
    77 abs(1) -> Int [Int]
        "int abs(int nValue);";
    78 EffectHeal(1) -> Effect [Int]
        "effect EffectHeal(int nDamageToHeal);";
    79 EffectDamage(1) -> Effect [Int, Int, Int]
        "effect EffectDamage(int nDamageAmount, int nDamageType=DAMAGE_TYPE_MAGICAL, int nDamagePower=DAMAGE_POWER_NORMAL);";
    80 EffectAbilityIncrease(2) -> Effect [Int, Int]
        "effect EffectAbilityIncrease(int nAbilityToIncrease, int nModifyBy);";
    81 EffectDamageResistance(2) -> Effect [Int, Int, Int]
        "effect EffectDamageResistance(int nDamageType, int nAmount, int nLimit=0);";
    82 EffectResurrection(0) -> Effect []
        "effect EffectResurrection();";
    83 EffectSummonCreature(1) -> Effect [String, Int, Float, Int]
        "effect EffectSummonCreature(string sCreatureResref, int nVisualEffectId=VFX_NONE, float fDelaySeconds=0.0f, int nUseAppearAnimation=0);";
    84 GetCasterLevel(1) -> Int [Object]
        "int GetCasterLevel(object oCreature);";
    85 GetFirstEffect(1) -> Effect [Object]
        "effect GetFirstEffect(object oCreature);";
    86 GetNextEffect(1) -> Effect [Object]
        "effect GetNextEffect(object oCreature);";
    87 RemoveEffect(2) -> Void [Object, Effect]
        "void RemoveEffect(object oCreature, effect eEffect);";
    88 GetIsEffectValid(1) -> Int [Effect]
        "int GetIsEffectValid(effect eEffect);";
    89 GetEffectDurationType(1) -> Int [Effect]
        "int GetEffectDurationType(effect eEffect);";
    90 GetEffectSubType(1) -> Int [Effect]
        "int GetEffectSubType(effect eEffect);";
    91 GetEffectCreator(1) -> Object [Effect]
        "object GetEffectCreator(effect eEffect);";
    92 IntToString(1) -> String [Int]
        "string IntToString(int nInteger);";
    93 GetFirstObjectInArea(0) -> Object [Object]
        "object GetFirstObjectInArea(object oArea=OBJECT_INVALID);";
    94 GetNextObjectInArea(0) -> Object [Object]
        "object GetNextObjectInArea(object oArea=OBJECT_INVALID);";
    95 d2(0) -> Int [Int]
        "int d2(int nNumDice=1);";
    96 d3(0) -> Int [Int]
        "int d3(int nNumDice=1);";
    97 d4(0) -> Int [Int]
        "int d4(int nNumDice=1);";
    98 d6(0) -> Int [Int]
        "int d6(int nNumDice=1);";
    99 d8(0) -> Int [Int]
        "int d8(int nNumDice=1);";
    100 d10(0) -> Int [Int]
        "int d10(int nNumDice=1);";
    101 d12(0) -> Int [Int]
        "int d12(int nNumDice=1);";
    102 d20(0) -> Int [Int]
        "int d20(int nNumDice=1);";
    103 d100(0) -> Int [Int]
        "int d100(int nNumDice=1);";
    104 VectorMagnitude(1) -> Float [Vector]
        "float VectorMagnitude(vector vVector);";
    105 GetMetaMagicFeat(0) -> Int []
        "int GetMetaMagicFeat();";
    106 GetObjectType(1) -> Int [Object]
        "int GetObjectType(object oTarget);";
    107 GetRacialType(1) -> Int [Object]
        "int GetRacialType(object oCreature);";
    108 FortitudeSave(2) -> Int [Object, Int, Int, Object]
        "int FortitudeSave(object oCreature, int nDC, int nSaveType=SAVING_THROW_TYPE_NONE, object oSaveVersus=OBJECT_SELF);";
    109 ReflexSave(2) -> Int [Object, Int, Int, Object]
        "int ReflexSave(object oCreature, int nDC, int nSaveType=SAVING_THROW_TYPE_NONE, object oSaveVersus=OBJECT_SELF);";
    110 WillSave(2) -> Int [Object, Int, Int, Object]
        "int WillSave(object oCreature, int nDC, int nSaveType=SAVING_THROW_TYPE_NONE, object oSaveVersus=OBJECT_SELF);";
    111 GetSpellSaveDC(0) -> Int []
        "int GetSpellSaveDC();";
    112 MagicalEffect(1) -> Effect [Effect]
        "effect MagicalEffect(effect eEffect);";
    113 SupernaturalEffect(1) -> Effect [Effect]
        "effect SupernaturalEffect(effect eEffect);";
    114 ExtraordinaryEffect(1) -> Effect [Effect]
        "effect ExtraordinaryEffect(effect eEffect);";
    115 EffectACIncrease(1) -> Effect [Int, Int, Int]
        "effect EffectACIncrease(int nValue, int nModifyType=AC_DODGE_BONUS, int nDamageType=AC_VS_DAMAGE_TYPE_ALL);";
    116 GetAC(1) -> Int [Object, Int]
        "int GetAC(object oObject, int nForFutureUse=0);";
    117 EffectSavingThrowIncrease(2) -> Effect [Int, Int, Int]
        "effect EffectSavingThrowIncrease(int nSave, int nValue, int nSaveType=SAVING_THROW_TYPE_ALL);";
    118 EffectAttackIncrease(1) -> Effect [Int, Int]
        "effect EffectAttackIncrease(int nBonus, int nModifierType=ATTACK_BONUS_MISC);";
    119 EffectDamageReduction(2) -> Effect [Int, Int, Int]
        "effect EffectDamageReduction(int nAmount, int nDamagePower, int nLimit=0);";
    120 EffectDamageIncrease(1) -> Effect [Int, Int]
        "effect EffectDamageIncrease(int nBonus, int nDamageType=DAMAGE_TYPE_MAGICAL);";
    121 RoundsToSeconds(1) -> Float [Int]
        "float RoundsToSeconds(int nRounds);";
    122 HoursToSeconds(1) -> Float [Int]
        "float HoursToSeconds(int nHours);";
    123 TurnsToSeconds(1) -> Float [Int]
        "float TurnsToSeconds(int nTurns);";
    124 GetLawChaosValue(1) -> Int [Object]
        "int GetLawChaosValue(object oCreature);";
    125 GetGoodEvilValue(1) -> Int [Object]
        "int GetGoodEvilValue(object oCreature);";
    126 GetAlignmentLawChaos(1) -> Int [Object]
        "int GetAlignmentLawChaos(object oCreature);";
    127 GetAlignmentGoodEvil(1) -> Int [Object]
        "int GetAlignmentGoodEvil(object oCreature);";
    128 GetFirstObjectInShape(3) -> Object [Int, Float, Location, Int, Int, Vector]
        "object GetFirstObjectInShape(int nShape, float fSize, location lTarget, int bLineOfSight=FALSE, int nObjectFilter=OBJECT_TYPE_CREATURE, vector vOrigin=[0.0,0.0,0.0]);";
    129 GetNextObjectInShape(3) -> Object [Int, Float, Location, Int, Int, Vector]
        "object GetNextObjectInShape(int nShape, float fSize, location lTarget, int bLineOfSight=FALSE, int nObjectFilter=OBJECT_TYPE_CREATURE, vector vOrigin=[0.0,0.0,0.0]);";
    130 EffectEntangle(0) -> Effect []
        "effect EffectEntangle();";
    131 SignalEvent(2) -> Void [Object, Event]
        "void SignalEvent(object oObject, event evToRun);";
    132 EventUserDefined(1) -> Event [Int]
        "event EventUserDefined(int nUserDefinedEventNumber);";
    133 EffectDeath(0) -> Effect [Int, Int]
        "effect EffectDeath(int nSpectacularDeath=FALSE, int nDisplayFeedback=TRUE);";
    134 EffectKnockdown(0) -> Effect []
        "effect EffectKnockdown();";
    135 ActionGiveItem(2) -> Void [Object, Object]
        "void ActionGiveItem(object oItem, object oGiveTo);";
    136 ActionTakeItem(2) -> Void [Object, Object]
        "void ActionTakeItem(object oItem, object oTakeFrom);";
    137 VectorNormalize(1) -> Vector [Vector]
        "vector VectorNormalize(vector vVector);";
    138 EffectCurse(0) -> Effect [Int, Int, Int, Int, Int, Int]
        "effect EffectCurse(int nStrMod=1, int nDexMod=1, int nConMod=1, int nIntMod=1, int nWisMod=1, int nChaMod=1);";
    139 GetAbilityScore(2) -> Int [Object, Int, Int]
        "int GetAbilityScore(object oCreature, int nAbilityType, int nBaseAbilityScore=FALSE);";
    140 GetIsDead(1) -> Int [Object]
        "int GetIsDead(object oCreature);";
    141 PrintVector(2) -> Void [Vector, Int]
        "void PrintVector(vector vVector, int bPrepend);";
    142 Vector(0) -> Vector [Float, Float, Float]
        "vector Vector(float x=0.0f, float y=0.0f, float z=0.0f);";
    143 SetFacingPoint(1) -> Void [Vector]
        "void SetFacingPoint(vector vTarget);";
    144 AngleToVector(1) -> Vector [Float]
        "vector AngleToVector(float fAngle);";
    145 VectorToAngle(1) -> Float [Vector]
        "float VectorToAngle(vector vVector);";
    146 TouchAttackMelee(1) -> Int [Object, Int]
        "int TouchAttackMelee(object oTarget, int bDisplayFeedback=TRUE);";
    147 TouchAttackRanged(1) -> Int [Object, Int]
        "int TouchAttackRanged(object oTarget, int bDisplayFeedback=TRUE);";
    148 EffectParalyze(0) -> Effect []
        "effect EffectParalyze();";
    149 EffectSpellImmunity(0) -> Effect [Int]
        "effect EffectSpellImmunity(int nImmunityToSpell=SPELL_ALL_SPELLS);";
    150 EffectDeaf(0) -> Effect []
        "effect EffectDeaf();";
    151 GetDistanceBetween(2) -> Float [Object, Object]
        "float GetDistanceBetween(object oObjectA, object oObjectB);";
    152 SetLocalLocation(3) -> Void [Object, String, Location]
        "void SetLocalLocation(object oObject, string sVarName, location lValue);";
    153 GetLocalLocation(2) -> Location [Object, String]
        "location GetLocalLocation(object oObject, string sVarName);";
    154 EffectSleep(0) -> Effect []
        "effect EffectSleep();";
    155 GetItemInSlot(1) -> Object [Int, Object]
        "object GetItemInSlot(int nInventorySlot, object oCreature=OBJECT_SELF);";
    156 EffectCharmed(0) -> Effect []
        "effect EffectCharmed();";
    157 EffectConfused(0) -> Effect []
        "effect EffectConfused();";
    158 EffectFrightened(0) -> Effect []
        "effect EffectFrightened();";
    159 EffectDominated(0) -> Effect []
        "effect EffectDominated();";
    160 EffectDazed(0) -> Effect []
        "effect EffectDazed();";
    161 EffectStunned(0) -> Effect []
        "effect EffectStunned();";
    162 SetCommandable(1) -> Void [Int, Object]
        "void SetCommandable(int bCommandable, object oTarget=OBJECT_SELF);";
    163 GetCommandable(0) -> Int [Object]
        "int GetCommandable(object oTarget=OBJECT_SELF);";
    164 EffectRegenerate(2) -> Effect [Int, Float]
        "effect EffectRegenerate(int nAmount, float fIntervalSeconds);";
    165 EffectMovementSpeedIncrease(1) -> Effect [Int]
        "effect EffectMovementSpeedIncrease(int nPercentChange);";
    166 GetHitDice(1) -> Int [Object]
        "int GetHitDice(object oCreature);";
    167 ActionForceFollowObject(1) -> Void [Object, Float]
        "void ActionForceFollowObject(object oFollow, float fFollowDistance=0.0f);";
    168 GetTag(1) -> String [Object]
        "string GetTag(object oObject);";
    169 ResistSpell(2) -> Int [Object, Object]
        "int ResistSpell(object oCaster, object oTarget);";
    170 GetEffectType(1) -> Int [Effect]
        "int GetEffectType(effect eEffect);";
    171 EffectAreaOfEffect(1) -> Effect [Int, String, String, String]
        r#"effect EffectAreaOfEffect(int nAreaEffectId, string sOnEnterScript="", string sHeartbeatScript="", string sOnExitScript="");"#;
    172 GetFactionEqual(1) -> Int [Object, Object]
        "int GetFactionEqual(object oFirstObject, object oSecondObject=OBJECT_SELF);";
    173 ChangeFaction(2) -> Void [Object, Object]
        "void ChangeFaction(object oObjectToChangeFaction, object oMemberOfFactionToJoin);";
    174 GetIsListening(1) -> Int [Object]
        "int GetIsListening(object oObject);";
    175 SetListening(2) -> Void [Object, Int]
        "void SetListening(object oObject, int bValue);";
    176 SetListenPattern(2) -> Void [Object, String, Int]
        "void SetListenPattern(object oObject, string sPattern, int nNumber=0);";
    177 TestStringAgainstPattern(2) -> Int [String, String]
        "int TestStringAgainstPattern(string sPattern, string sStringToTest);";
    178 GetMatchedSubstring(1) -> String [Int]
        "string GetMatchedSubstring(int nString);";
    179 GetMatchedSubstringsCount(0) -> Int []
        "int GetMatchedSubstringsCount();";
    180 EffectVisualEffect(1) -> Effect [Int, Int]
        "effect EffectVisualEffect(int nVisualEffectId, int nMissEffect=FALSE);";
    181 GetFactionWeakestMember(0) -> Object [Object, Int]
        "object GetFactionWeakestMember(object oFactionMember=OBJECT_SELF, int bMustBeVisible=TRUE);";
    182 GetFactionStrongestMember(0) -> Object [Object, Int]
        "object GetFactionStrongestMember(object oFactionMember=OBJECT_SELF, int bMustBeVisible=TRUE);";
    183 GetFactionMostDamagedMember(0) -> Object [Object, Int]
        "object GetFactionMostDamagedMember(object oFactionMember=OBJECT_SELF, int bMustBeVisible=TRUE);";
    184 GetFactionLeastDamagedMember(0) -> Object [Object, Int]
        "object GetFactionLeastDamagedMember(object oFactionMember=OBJECT_SELF, int bMustBeVisible=TRUE);";
    185 GetFactionGold(1) -> Int [Object]
        "int GetFactionGold(object oFactionMember);";
    186 GetFactionAverageReputation(2) -> Int [Object, Object]
        "int GetFactionAverageReputation(object oSourceFactionMember, object oTarget);";
    187 GetFactionAverageGoodEvilAlignment(1) -> Int [Object]
        "int GetFactionAverageGoodEvilAlignment(object oFactionMember);";
    188 GetFactionAverageLawChaosAlignment(1) -> Int [Object]
        "int GetFactionAverageLawChaosAlignment(object oFactionMember);";
    189 GetFactionAverageLevel(1) -> Int [Object]
        "int GetFactionAverageLevel(object oFactionMember);";
    190 GetFactionAverageXP(1) -> Int [Object]
        "int GetFactionAverageXP(object oFactionMember);";
    191 GetFactionMostFrequentClass(1) -> Int [Object]
        "int GetFactionMostFrequentClass(object oFactionMember);";
    192 GetFactionWorstAC(0) -> Object [Object, Int]
        "object GetFactionWorstAC(object oFactionMember=OBJECT_SELF, int bMustBeVisible=TRUE);";
    193 GetFactionBestAC(0) -> Object [Object, Int]
        "object GetFactionBestAC(object oFactionMember=OBJECT_SELF, int bMustBeVisible=TRUE);";
    194 ActionSit(1) -> Void [Object]
        "void ActionSit(object oChair);";
    195 GetListenPatternNumber(0) -> Int []
        "int GetListenPatternNumber();";
    196 ActionJumpToObject(1) -> Void [Object, Int]
        "void ActionJumpToObject(object oToJumpTo, int bWalkStraightLineToPoint=TRUE);";
    197 GetWaypointByTag(1) -> Object [String]
        "object GetWaypointByTag(string sWaypointTag);";
    198 GetTransitionTarget(1) -> Object [Object]
        "object GetTransitionTarget(object oTransition);";
    199 EffectLinkEffects(2) -> Effect [Effect, Effect]
        "effect EffectLinkEffects(effect eChildEffect, effect eParentEffect);";
    200 GetObjectByTag(1) -> Object [String, Int]
        "object GetObjectByTag(string sTag, int nNth=0);";
    201 AdjustAlignment(3) -> Void [Object, Int, Int, Int]
        "void AdjustAlignment(object oSubject, int nAlignment, int nShift, int bAllPartyMembers=TRUE);";
    202 ActionWait(1) -> Void [Float]
        "void ActionWait(float fSeconds);";
    203 SetAreaTransitionBMP(1) -> Void [Int, String]
        r#"void SetAreaTransitionBMP(int nPredefinedAreaTransition, string sCustomAreaTransitionBMP="");"#;
    204 ActionStartConversation(1) -> Void [Object, String, Int, Int]
        r#"void ActionStartConversation(object oObjectToConverseWith, string sDialogResRef="", int bPrivateConversation=FALSE, int bPlayHello=TRUE);"#;
    205 ActionPauseConversation(0) -> Void []
        "void ActionPauseConversation();";
    206 ActionResumeConversation(0) -> Void []
        "void ActionResumeConversation();";
    207 EffectBeam(3) -> Effect [Int, Object, Int, Int]
        "effect EffectBeam(int nBeamVisualEffect, object oEffector, int nBodyPart, int bMissEffect=FALSE);";
    208 GetReputation(2) -> Int [Object, Object]
        "int GetReputation(object oSource, object oTarget);";
    209 AdjustReputation(3) -> Void [Object, Object, Int]
        "void AdjustReputation(object oTarget, object oSourceFactionMember, int nAdjustment);";
    210 GetSittingCreature(1) -> Object [Object]
        "object GetSittingCreature(object oChair);";
    211 GetGoingToBeAttackedBy(1) -> Object [Object]
        "object GetGoingToBeAttackedBy(object oTarget);";
    212 EffectSpellResistanceIncrease(1) -> Effect [Int]
        "effect EffectSpellResistanceIncrease(int nValue);";
    213 GetLocation(1) -> Location [Object]
        "location GetLocation(object oObject);";
    214 ActionJumpToLocation(1) -> Void [Location]
        "void ActionJumpToLocation(location lLocation);";
    215 Location(3) -> Location [Object, Vector, Float]
        "location Location(object oArea, vector vPosition, float fOrientation);";
    216 ApplyEffectAtLocation(3) -> Void [Int, Effect, Location, Float]
        "void ApplyEffectAtLocation(int nDurationType, effect eEffect, location lLocation, float fDuration=0.0f);";
    217 GetIsPC(1) -> Int [Object]
        "int GetIsPC(object oCreature);";
    218 FeetToMeters(1) -> Float [Float]
        "float FeetToMeters(float fFeet);";
    219 YardsToMeters(1) -> Float [Float]
        "float YardsToMeters(float fYards);";
    220 ApplyEffectToObject(3) -> Void [Int, Effect, Object, Float]
        "void ApplyEffectToObject(int nDurationType, effect eEffect, object oTarget, float fDuration=0.0f);";
    221 SpeakString(1) -> Void [String, Int]
        "void SpeakString(string sStringToSpeak, int nTalkVolume=TALKVOLUME_TALK);";
    222 GetSpellTargetLocation(0) -> Location []
        "location GetSpellTargetLocation();";
    223 GetPositionFromLocation(1) -> Vector [Location]
        "vector GetPositionFromLocation(location lLocation);";
    224 GetAreaFromLocation(1) -> Object [Location]
        "object GetAreaFromLocation(location lLocation);";
    225 GetFacingFromLocation(1) -> Float [Location]
        "float GetFacingFromLocation(location lLocation);";
    226 GetNearestCreatureToLocation(3) -> Object [Int, Int, Location, Int, Int, Int, Int, Int]
        "object GetNearestCreatureToLocation(int nFirstCriteriaType, int nFirstCriteriaValue, location lLocation, int nNth=1, int nSecondCriteriaType=-1, int nSecondCriteriaValue=-1, int nThirdCriteriaType=-1, int nThirdCriteriaValue=-1);";
    227 GetNearestObject(0) -> Object [Int, Object, Int]
        "object GetNearestObject(int nObjectType=OBJECT_TYPE_ALL, object oTarget=OBJECT_SELF, int nNth=1);";
    228 GetNearestObjectToLocation(2) -> Object [Int, Location, Int]
        "object GetNearestObjectToLocation(int nObjectType, location lLocation, int nNth=1);";
    229 GetNearestObjectByTag(1) -> Object [String, Object, Int]
        "object GetNearestObjectByTag(string sTag, object oTarget=OBJECT_SELF, int nNth=1);";
    230 IntToFloat(1) -> Float [Int]
        "float IntToFloat(int nInteger);";
    231 FloatToInt(1) -> Int [Float]
        "int FloatToInt(float fFloat);";
    232 StringToInt(1) -> Int [String]
        "int StringToInt(string sNumber);";
    233 StringToFloat(1) -> Float [String]
        "float StringToFloat(string sNumber);";
    234 ActionCastSpellAtLocation(2) -> Void [Int, Location, Int, Int, Int, Int]
        "void ActionCastSpellAtLocation(int nSpell, location lTargetLocation, int nMetaMagic=METAMAGIC_ANY, int bCheat=FALSE, int nProjectilePathType=PROJECTILE_PATH_TYPE_DEFAULT, int bInstantSpell=FALSE);";
    235 GetIsEnemy(1) -> Int [Object, Object]
        "int GetIsEnemy(object oTarget, object oSource=OBJECT_SELF);";
    236 GetIsFriend(1) -> Int [Object, Object]
        "int GetIsFriend(object oTarget, object oSource=OBJECT_SELF);";
    237 GetIsNeutral(1) -> Int [Object, Object]
        "int GetIsNeutral(object oTarget, object oSource=OBJECT_SELF);";
    238 GetPCSpeaker(0) -> Object []
        "object GetPCSpeaker();";
    239 GetStringByStrRef(1) -> String [Int, Int]
        "string GetStringByStrRef(int nStrRef, int nGender=GENDER_MALE);";
    240 ActionSpeakStringByStrRef(1) -> Void [Int, Int]
        "void ActionSpeakStringByStrRef(int nStrRef, int nTalkVolume=TALKVOLUME_TALK);";
    241 DestroyObject(1) -> Void [Object, Float]
        "void DestroyObject(object oDestroy, float fDelay=0.0f);";
    242 GetModule(0) -> Object []
        "object GetModule();";
    243 CreateObject(3) -> Object [Int, String, Location, Int, String]
        r#"object CreateObject(int nObjectType, string sTemplate, location lLocation, int bUseAppearAnimation=FALSE, string sNewTag="");"#;
    244 EventSpellCastAt(2) -> Event [Object, Int, Int]
        "event EventSpellCastAt(object oCaster, int nSpell, int bHarmful=TRUE);";
    245 GetLastSpellCaster(0) -> Object []
        "object GetLastSpellCaster();";
    246 GetLastSpell(0) -> Int []
        "int GetLastSpell();";
    247 GetUserDefinedEventNumber(0) -> Int []
        "int GetUserDefinedEventNumber();";
    248 GetSpellId(0) -> Int []
        "int GetSpellId();";
    249 RandomName(0) -> String [Int]
        "string RandomName(int nNameType=NAME_FIRST_GENERIC_MALE);";
    250 EffectPoison(1) -> Effect [Int]
        "effect EffectPoison(int nPoisonType);";
    251 EffectDisease(1) -> Effect [Int]
        "effect EffectDisease(int nDiseaseType);";
    252 EffectSilence(0) -> Effect []
        "effect EffectSilence();";
    253 GetName(1) -> String [Object, Int]
        "string GetName(object oObject, int bOriginalName=FALSE);";
    254 GetLastSpeaker(0) -> Object []
        "object GetLastSpeaker();";
    255 BeginConversation(0) -> Int [String, Object]
        r#"int BeginConversation(string sResRef="", object oObjectToDialog=OBJECT_INVALID);"#;
    256 GetLastPerceived(0) -> Object []
        "object GetLastPerceived();";
    257 GetLastPerceptionHeard(0) -> Int []
        "int GetLastPerceptionHeard();";
    258 GetLastPerceptionInaudible(0) -> Int []
        "int GetLastPerceptionInaudible();";
    259 GetLastPerceptionSeen(0) -> Int []
        "int GetLastPerceptionSeen();";
    260 GetLastClosedBy(0) -> Object []
        "object GetLastClosedBy();";
    261 GetLastPerceptionVanished(0) -> Int []
        "int GetLastPerceptionVanished();";
    262 GetFirstInPersistentObject(0) -> Object [Object, Int, Int]
        "object GetFirstInPersistentObject(object oPersistentObject=OBJECT_SELF, int nResidentObjectType=OBJECT_TYPE_CREATURE, int nPersistentZone=PERSISTENT_ZONE_ACTIVE);";
    263 GetNextInPersistentObject(0) -> Object [Object, Int, Int]
        "object GetNextInPersistentObject(object oPersistentObject=OBJECT_SELF, int nResidentObjectType=OBJECT_TYPE_CREATURE, int nPersistentZone=PERSISTENT_ZONE_ACTIVE);";
    264 GetAreaOfEffectCreator(0) -> Object [Object]
        "object GetAreaOfEffectCreator(object oAreaOfEffectObject=OBJECT_SELF);";
    265 DeleteLocalInt(2) -> Void [Object, String]
        "void DeleteLocalInt(object oObject, string sVarName);";
    266 DeleteLocalFloat(2) -> Void [Object, String]
        "void DeleteLocalFloat(object oObject, string sVarName);";
    267 DeleteLocalString(2) -> Void [Object, String]
        "void DeleteLocalString(object oObject, string sVarName);";
    268 DeleteLocalObject(2) -> Void [Object, String]
        "void DeleteLocalObject(object oObject, string sVarName);";
    269 DeleteLocalLocation(2) -> Void [Object, String]
        "void DeleteLocalLocation(object oObject, string sVarName);";
    270 EffectHaste(0) -> Effect []
        "effect EffectHaste();";
    271 EffectSlow(0) -> Effect []
        "effect EffectSlow();";
    272 ObjectToString(1) -> String [Object]
        "string ObjectToString(object oObject);";
    273 EffectImmunity(1) -> Effect [Int]
        "effect EffectImmunity(int nImmunityType);";
    274 GetIsImmune(2) -> Int [Object, Int, Object]
        "int GetIsImmune(object oCreature, int nImmunityType, object oVersus=OBJECT_INVALID);";
    275 EffectDamageImmunityIncrease(2) -> Effect [Int, Int]
        "effect EffectDamageImmunityIncrease(int nDamageType, int nPercentImmunity);";
    276 GetEncounterActive(0) -> Int [Object]
        "int GetEncounterActive(object oEncounter=OBJECT_SELF);";
    277 SetEncounterActive(1) -> Void [Int, Object]
        "void SetEncounterActive(int nNewValue, object oEncounter=OBJECT_SELF);";
    278 GetEncounterSpawnsMax(0) -> Int [Object]
        "int GetEncounterSpawnsMax(object oEncounter=OBJECT_SELF);";
    279 SetEncounterSpawnsMax(1) -> Void [Int, Object]
        "void SetEncounterSpawnsMax(int nNewValue, object oEncounter=OBJECT_SELF);";
    280 GetEncounterSpawnsCurrent(0) -> Int [Object]
        "int GetEncounterSpawnsCurrent(object oEncounter=OBJECT_SELF);";
    281 SetEncounterSpawnsCurrent(1) -> Void [Int, Object]
        "void SetEncounterSpawnsCurrent(int nNewValue, object oEncounter=OBJECT_SELF);";
    282 GetModuleItemAcquired(0) -> Object []
        "object GetModuleItemAcquired();";
    283 GetModuleItemAcquiredFrom(0) -> Object []
        "object GetModuleItemAcquiredFrom();";
    284 SetCustomToken(2) -> Void [Int, String]
        "void SetCustomToken(int nCustomTokenNumber, string sTokenValue);";
    285 GetHasFeat(1) -> Int [Int, Object]
        "int GetHasFeat(int nFeat, object oCreature=OBJECT_SELF);";
    286 GetHasSkill(1) -> Int [Int, Object]
        "int GetHasSkill(int nSkill, object oCreature=OBJECT_SELF);";
    287 ActionUseFeat(2) -> Void [Int, Object]
        "void ActionUseFeat(int nFeat, object oTarget);";
    288 ActionUseSkill(2) -> Void [Int, Object, Int, Object]
        "void ActionUseSkill(int nSkill, object oTarget, int nSubSkill=0, object oItemUsed=OBJECT_INVALID);";
    289 GetObjectSeen(1) -> Int [Object, Object]
        "int GetObjectSeen(object oTarget, object oSource=OBJECT_SELF);";
    290 GetObjectHeard(1) -> Int [Object, Object]
        "int GetObjectHeard(object oTarget, object oSource=OBJECT_SELF);";
    291 GetLastPlayerDied(0) -> Object []
        "object GetLastPlayerDied();";
    292 GetModuleItemLost(0) -> Object []
        "object GetModuleItemLost();";
    293 GetModuleItemLostBy(0) -> Object []
        "object GetModuleItemLostBy();";
    294 ActionDoCommand(1) -> Void [Action]
        "void ActionDoCommand(action aActionToDo);";
    295 EventConversation(0) -> Event []
        "event EventConversation();";
    296 SetEncounterDifficulty(1) -> Void [Int, Object]
        "void SetEncounterDifficulty(int nEncounterDifficulty, object oEncounter=OBJECT_SELF);";
    297 GetEncounterDifficulty(0) -> Int [Object]
        "int GetEncounterDifficulty(object oEncounter=OBJECT_SELF);";
    298 GetDistanceBetweenLocations(2) -> Float [Location, Location]
        "float GetDistanceBetweenLocations(location lLocationA, location lLocationB);";
    299 GetReflexAdjustedDamage(3) -> Int [Int, Object, Int, Int, Object]
        "int GetReflexAdjustedDamage(int nDamage, object oTarget, int nDC, int nSaveType=SAVING_THROW_TYPE_NONE, object oSaveVersus=OBJECT_SELF);";
    300 PlayAnimation(1) -> Void [Int, Float, Float]
        "void PlayAnimation(int nAnimation, float fSpeed=1.0, float fSeconds=0.0);";
    301 TalentSpell(1) -> Talent [Int]
        "talent TalentSpell(int nSpell);";
    302 TalentFeat(1) -> Talent [Int]
        "talent TalentFeat(int nFeat);";
    303 TalentSkill(1) -> Talent [Int]
        "talent TalentSkill(int nSkill);";
    304 GetHasSpellEffect(1) -> Int [Int, Object]
        "int GetHasSpellEffect(int nSpell, object oObject=OBJECT_SELF);";
    305 GetEffectSpellId(1) -> Int [Effect]
        "int GetEffectSpellId(effect eSpellEffect);";
    306 GetCreatureHasTalent(1) -> Int [Talent, Object]
        "int GetCreatureHasTalent(talent tTalent, object oCreature=OBJECT_SELF);";
    307 GetCreatureTalentRandom(1) -> Talent [Int, Object]
        "talent GetCreatureTalentRandom(int nCategory, object oCreature=OBJECT_SELF);";
    308 GetCreatureTalentBest(2) -> Talent [Int, Int, Object]
        "talent GetCreatureTalentBest(int nCategory, int nCRMax, object oCreature=OBJECT_SELF);";
    309 ActionUseTalentOnObject(2) -> Void [Talent, Object]
        "void ActionUseTalentOnObject(talent tChosenTalent, object oTarget);";
    310 ActionUseTalentAtLocation(2) -> Void [Talent, Location]
        "void ActionUseTalentAtLocation(talent tChosenTalent, location lTargetLocation);";
    311 GetGoldPieceValue(1) -> Int [Object]
        "int GetGoldPieceValue(object oItem);";
    312 GetIsPlayableRacialType(1) -> Int [Object]
        "int GetIsPlayableRacialType(object oCreature);";
    313 JumpToLocation(1) -> Void [Location]
        "void JumpToLocation(location lDestination);";
    314 EffectTemporaryHitpoints(1) -> Effect [Int]
        "effect EffectTemporaryHitpoints(int nHitPoints);";
    315 GetSkillRank(1) -> Int [Int, Object]
        "int GetSkillRank(int nSkill, object oTarget=OBJECT_SELF);";
    316 GetAttackTarget(0) -> Object [Object]
        "object GetAttackTarget(object oCreature=OBJECT_SELF);";
    317 GetLastAttackType(0) -> Int [Object]
        "int GetLastAttackType(object oCreature=OBJECT_SELF);";
    318 GetLastAttackMode(0) -> Int [Object]
        "int GetLastAttackMode(object oCreature=OBJECT_SELF);";
    319 GetMaster(0) -> Object [Object]
        "object GetMaster(object oAssociate=OBJECT_SELF);";
    320 GetIsInCombat(0) -> Int [Object]
        "int GetIsInCombat(object oCreature=OBJECT_SELF);";
    321 GetLastAssociateCommand(0) -> Int [Object]
        "int GetLastAssociateCommand(object oAssociate=OBJECT_SELF);";
    322 GiveGoldToCreature(2) -> Void [Object, Int]
        "void GiveGoldToCreature(object oCreature, int nGP);";
    323 SetIsDestroyable(1) -> Void [Int, Int, Int]
        "void SetIsDestroyable(int bDestroyable, int bRaiseable=TRUE, int bSelectableWhenDead=FALSE);";
    324 SetLocked(2) -> Void [Object, Int]
        "void SetLocked(object oTarget, int bLocked);";
    325 GetLocked(1) -> Int [Object]
        "int GetLocked(object oTarget);";
    326 GetClickingObject(0) -> Object []
        "object GetClickingObject();";
    327 SetAssociateListenPatterns(0) -> Void [Object]
        "void SetAssociateListenPatterns(object oTarget=OBJECT_SELF);";
    328 GetLastWeaponUsed(1) -> Object [Object]
        "object GetLastWeaponUsed(object oCreature);";
    329 ActionInteractObject(1) -> Void [Object]
        "void ActionInteractObject(object oPlaceable);";
    330 GetLastUsedBy(0) -> Object []
        "object GetLastUsedBy();";
    331 GetAbilityModifier(1) -> Int [Int, Object]
        "int GetAbilityModifier(int nAbility, object oCreature=OBJECT_SELF);";
    332 GetIdentified(1) -> Int [Object]
        "int GetIdentified(object oItem);";
    333 SetIdentified(2) -> Void [Object, Int]
        "void SetIdentified(object oItem, int bIdentified);";
    334 SummonAnimalCompanion(0) -> Void [Object]
        "void SummonAnimalCompanion(object oMaster=OBJECT_SELF);";
    335 SummonFamiliar(0) -> Void [Object]
        "void SummonFamiliar(object oMaster=OBJECT_SELF);";
    336 GetBlockingDoor(0) -> Object []
        "object GetBlockingDoor();";
    337 GetIsDoorActionPossible(2) -> Int [Object, Int]
        "int GetIsDoorActionPossible(object oTargetDoor, int nDoorAction);";
    338 DoDoorAction(2) -> Void [Object, Int]
        "void DoDoorAction(object oTargetDoor, int nDoorAction);";
    339 GetFirstItemInInventory(0) -> Object [Object]
        "object GetFirstItemInInventory(object oTarget=OBJECT_SELF);";
    340 GetNextItemInInventory(0) -> Object [Object]
        "object GetNextItemInInventory(object oTarget=OBJECT_SELF);";
    341 GetClassByPosition(1) -> Int [Int, Object]
        "int GetClassByPosition(int nClassPosition, object oCreature=OBJECT_SELF);";
    342 GetLevelByPosition(1) -> Int [Int, Object]
        "int GetLevelByPosition(int nClassPosition, object oCreature=OBJECT_SELF);";
    343 GetLevelByClass(1) -> Int [Int, Object]
        "int GetLevelByClass(int nClassType, object oCreature=OBJECT_SELF);";
    344 GetDamageDealtByType(1) -> Int [Int]
        "int GetDamageDealtByType(int nDamageType);";
    345 GetTotalDamageDealt(0) -> Int []
        "int GetTotalDamageDealt();";
    346 GetLastDamager(0) -> Object [Object]
        "object GetLastDamager(object oObject=OBJECT_SELF);";
    347 GetLastDisarmed(0) -> Object []
        "object GetLastDisarmed();";
    348 GetLastDisturbed(0) -> Object []
        "object GetLastDisturbed();";
    349 GetLastLocked(0) -> Object []
        "object GetLastLocked();";
    350 GetLastUnlocked(0) -> Object []
        "object GetLastUnlocked();";
    351 EffectSkillIncrease(2) -> Effect [Int, Int]
        "effect EffectSkillIncrease(int nSkill, int nValue);";
    352 GetInventoryDisturbType(0) -> Int []
        "int GetInventoryDisturbType();";
    353 GetInventoryDisturbItem(0) -> Object []
        "object GetInventoryDisturbItem();";
    354 GetHenchman(0) -> Object [Object, Int]
        "object GetHenchman(object oMaster=OBJECT_SELF, int nNth=1);";
    355 VersusAlignmentEffect(1) -> Effect [Effect, Int, Int]
        "effect VersusAlignmentEffect(effect eEffect, int nLawChaos=ALIGNMENT_ALL, int nGoodEvil=ALIGNMENT_ALL);";
    356 VersusRacialTypeEffect(2) -> Effect [Effect, Int]
        "effect VersusRacialTypeEffect(effect eEffect, int nRacialType);";
    357 VersusTrapEffect(1) -> Effect [Effect]
        "effect VersusTrapEffect(effect eEffect);";
    358 GetGender(1) -> Int [Object]
        "int GetGender(object oCreature);";
    359 GetIsTalentValid(1) -> Int [Talent]
        "int GetIsTalentValid(talent tTalent);";
    360 ActionMoveAwayFromLocation(1) -> Void [Location, Int, Float]
        "void ActionMoveAwayFromLocation(location lMoveAwayFrom, int bRun=FALSE, float fMoveAwayRange=40.0f);";
    361 GetAttemptedAttackTarget(0) -> Object []
        "object GetAttemptedAttackTarget();";
    362 GetTypeFromTalent(1) -> Int [Talent]
        "int GetTypeFromTalent(talent tTalent);";
    363 GetIdFromTalent(1) -> Int [Talent]
        "int GetIdFromTalent(talent tTalent);";
    364 GetAssociate(1) -> Object [Int, Object, Int]
        "object GetAssociate(int nAssociateType, object oMaster=OBJECT_SELF, int nTh=1);";
    365 AddHenchman(1) -> Void [Object, Object]
        "void AddHenchman(object oMaster, object oHenchman=OBJECT_SELF);";
    366 RemoveHenchman(1) -> Void [Object, Object]
        "void RemoveHenchman(object oMaster, object oHenchman=OBJECT_SELF);";
    367 AddJournalQuestEntry(3) -> Void [String, Int, Object, Int, Int, Int]
        "void AddJournalQuestEntry(string szPlotID, int nState, object oCreature, int bAllPartyMembers=TRUE, int bAllPlayers=FALSE, int bAllowOverrideHigher=FALSE);";
    368 RemoveJournalQuestEntry(2) -> Void [String, Object, Int, Int]
        "void RemoveJournalQuestEntry(string szPlotID, object oCreature, int bAllPartyMembers=TRUE, int bAllPlayers=FALSE);";
    369 GetPCPublicCDKey(1) -> String [Object, Int]
        "string GetPCPublicCDKey(object oPlayer, int nSinglePlayerCDKey=FALSE);";
    370 GetPCIPAddress(1) -> String [Object]
        "string GetPCIPAddress(object oPlayer);";
    371 GetPCPlayerName(1) -> String [Object]
        "string GetPCPlayerName(object oPlayer);";
    372 SetPCLike(2) -> Void [Object, Object]
        "void SetPCLike(object oPlayer, object oTarget);";
    373 SetPCDislike(2) -> Void [Object, Object]
        "void SetPCDislike(object oPlayer, object oTarget);";
    374 SendMessageToPC(2) -> Void [Object, String]
        "void SendMessageToPC(object oPlayer, string szMessage);";
    375 GetAttemptedSpellTarget(0) -> Object []
        "object GetAttemptedSpellTarget();";
    376 GetLastOpenedBy(0) -> Object []
        "object GetLastOpenedBy();";
    377 GetHasSpell(1) -> Int [Int, Object]
        "int GetHasSpell(int nSpell, object oCreature=OBJECT_SELF);";
    378 OpenStore(2) -> Void [Object, Object, Int, Int]
        "void OpenStore(object oStore, object oPC, int nBonusMarkUp=0, int nBonusMarkDown=0);";
    379 EffectTurned(0) -> Effect []
        "effect EffectTurned();";
    380 GetFirstFactionMember(1) -> Object [Object, Int]
        "object GetFirstFactionMember(object oMemberOfFaction, int bPCOnly=TRUE);";
    381 GetNextFactionMember(1) -> Object [Object, Int]
        "object GetNextFactionMember(object oMemberOfFaction, int bPCOnly=TRUE);";
    382 ActionForceMoveToLocation(1) -> Void [Location, Int, Float]
        "void ActionForceMoveToLocation(location lDestination, int bRun=FALSE, float fTimeout=30.0f);";
    383 ActionForceMoveToObject(1) -> Void [Object, Int, Float, Float]
        "void ActionForceMoveToObject(object oMoveTo, int bRun=FALSE, float fRange=1.0f, float fTimeout=30.0f);";
    384 GetJournalQuestExperience(1) -> Int [String]
        "int GetJournalQuestExperience(string szPlotID);";
    385 JumpToObject(1) -> Void [Object, Int]
        "void JumpToObject(object oToJumpTo, int nWalkStraightLineToPoint=1);";
    386 SetMapPinEnabled(2) -> Void [Object, Int]
        "void SetMapPinEnabled(object oMapPin, int nEnabled);";
    387 EffectHitPointChangeWhenDying(1) -> Effect [Float]
        "effect EffectHitPointChangeWhenDying(float fHitPointChangePerRound);";
    388 PopUpGUIPanel(2) -> Void [Object, Int]
        "void PopUpGUIPanel(object oPC, int nGUIPanel);";
    389 ClearPersonalReputation(1) -> Void [Object, Object]
        "void ClearPersonalReputation(object oTarget, object oSource=OBJECT_SELF);";
    390 SetIsTemporaryFriend(1) -> Void [Object, Object, Int, Float]
        "void SetIsTemporaryFriend(object oTarget, object oSource=OBJECT_SELF, int bDecays=FALSE, float fDurationInSeconds=180.0f);";
    391 SetIsTemporaryEnemy(1) -> Void [Object, Object, Int, Float]
        "void SetIsTemporaryEnemy(object oTarget, object oSource=OBJECT_SELF, int bDecays=FALSE, float fDurationInSeconds=180.0f);";
    392 SetIsTemporaryNeutral(1) -> Void [Object, Object, Int, Float]
        "void SetIsTemporaryNeutral(object oTarget, object oSource=OBJECT_SELF, int bDecays=FALSE, float fDurationInSeconds=180.0f);";
    393 GiveXPToCreature(2) -> Void [Object, Int]
        "void GiveXPToCreature(object oCreature, int nXpAmount);";
    394 SetXP(2) -> Void [Object, Int]
        "void SetXP(object oCreature, int nXpAmount);";
    395 GetXP(1) -> Int [Object]
        "int GetXP(object oCreature);";
    396 IntToHexString(1) -> String [Int]
        "string IntToHexString(int nInteger);";
    397 GetBaseItemType(1) -> Int [Object]
        "int GetBaseItemType(object oItem);";
    398 GetItemHasItemProperty(2) -> Int [Object, Int]
        "int GetItemHasItemProperty(object oItem, int nProperty);";
    399 ActionEquipMostDamagingMelee(0) -> Void [Object, Int]
        "void ActionEquipMostDamagingMelee(object oVersus=OBJECT_INVALID, int bOffHand=FALSE);";
    400 ActionEquipMostDamagingRanged(0) -> Void [Object]
        "void ActionEquipMostDamagingRanged(object oVersus=OBJECT_INVALID);";
    401 GetItemACValue(1) -> Int [Object]
        "int GetItemACValue(object oItem);";
    402 ActionRest(0) -> Void [Int]
        "void ActionRest(int bCreatureToEnemyLineOfSightCheck=FALSE);";
    403 ExploreAreaForPlayer(2) -> Void [Object, Object, Int]
        "void ExploreAreaForPlayer(object oArea, object oPlayer, int bExplored=TRUE);";
    404 ActionEquipMostEffectiveArmor(0) -> Void []
        "void ActionEquipMostEffectiveArmor();";
    405 GetIsDay(0) -> Int []
        "int GetIsDay();";
    406 GetIsNight(0) -> Int []
        "int GetIsNight();";
    407 GetIsDawn(0) -> Int []
        "int GetIsDawn();";
    408 GetIsDusk(0) -> Int []
        "int GetIsDusk();";
    409 GetIsEncounterCreature(0) -> Int [Object]
        "int GetIsEncounterCreature(object oCreature=OBJECT_SELF);";
    410 GetLastPlayerDying(0) -> Object []
        "object GetLastPlayerDying();";
    411 GetStartingLocation(0) -> Location []
        "location GetStartingLocation();";
    412 ChangeToStandardFaction(2) -> Void [Object, Int]
        "void ChangeToStandardFaction(object oCreatureToChange, int nStandardFaction);";
    413 SoundObjectPlay(1) -> Void [Object]
        "void SoundObjectPlay(object oSound);";
    414 SoundObjectStop(1) -> Void [Object]
        "void SoundObjectStop(object oSound);";
    415 SoundObjectSetVolume(2) -> Void [Object, Int]
        "void SoundObjectSetVolume(object oSound, int nVolume);";
    416 SoundObjectSetPosition(2) -> Void [Object, Vector]
        "void SoundObjectSetPosition(object oSound, vector vPosition);";
    417 SpeakOneLinerConversation(0) -> Void [String, Object]
        r#"void SpeakOneLinerConversation(string sDialogResRef="", object oTokenTarget=OBJECT_TYPE_INVALID);"#;
    418 GetGold(0) -> Int [Object]
        "int GetGold(object oTarget=OBJECT_SELF);";
    419 GetLastRespawnButtonPresser(0) -> Object []
        "object GetLastRespawnButtonPresser();";
    420 GetIsDM(1) -> Int [Object]
        "int GetIsDM(object oCreature);";
    421 PlayVoiceChat(1) -> Void [Int, Object]
        "void PlayVoiceChat(int nVoiceChatID, object oTarget=OBJECT_SELF);";
    422 GetIsWeaponEffective(0) -> Int [Object, Int]
        "int GetIsWeaponEffective(object oVersus=OBJECT_INVALID, int bOffHand=FALSE);";
    423 GetLastSpellHarmful(0) -> Int []
        "int GetLastSpellHarmful();";
    424 EventActivateItem(2) -> Event [Object, Location, Object]
        "event EventActivateItem(object oItem, location lTarget, object oTarget=OBJECT_INVALID);";
    425 MusicBackgroundPlay(1) -> Void [Object]
        "void MusicBackgroundPlay(object oArea);";
    426 MusicBackgroundStop(1) -> Void [Object]
        "void MusicBackgroundStop(object oArea);";
    427 MusicBackgroundSetDelay(2) -> Void [Object, Int]
        "void MusicBackgroundSetDelay(object oArea, int nDelay);";
    428 MusicBackgroundChangeDay(2) -> Void [Object, Int]
        "void MusicBackgroundChangeDay(object oArea, int nTrack);";
    429 MusicBackgroundChangeNight(2) -> Void [Object, Int]
        "void MusicBackgroundChangeNight(object oArea, int nTrack);";
    430 MusicBattlePlay(1) -> Void [Object]
        "void MusicBattlePlay(object oArea);";
    431 MusicBattleStop(1) -> Void [Object]
        "void MusicBattleStop(object oArea);";
    432 MusicBattleChange(2) -> Void [Object, Int]
        "void MusicBattleChange(object oArea, int nTrack);";
    433 AmbientSoundPlay(1) -> Void [Object]
        "void AmbientSoundPlay(object oArea);";
    434 AmbientSoundStop(1) -> Void [Object]
        "void AmbientSoundStop(object oArea);";
    435 AmbientSoundChangeDay(2) -> Void [Object, Int]
        "void AmbientSoundChangeDay(object oArea, int nTrack);";
    436 AmbientSoundChangeNight(2) -> Void [Object, Int]
        "void AmbientSoundChangeNight(object oArea, int nTrack);";
    437 GetLastKiller(0) -> Object []
        "object GetLastKiller();";
    438 GetSpellCastItem(0) -> Object []
        "object GetSpellCastItem();";
    439 GetItemActivated(0) -> Object []
        "object GetItemActivated();";
    440 GetItemActivator(0) -> Object []
        "object GetItemActivator();";
    441 GetItemActivatedTargetLocation(0) -> Location []
        "location GetItemActivatedTargetLocation();";
    442 GetItemActivatedTarget(0) -> Object []
        "object GetItemActivatedTarget();";
    443 GetIsOpen(1) -> Int [Object]
        "int GetIsOpen(object oObject);";
    444 TakeGoldFromCreature(2) -> Void [Int, Object, Int]
        "void TakeGoldFromCreature(int nAmount, object oCreatureToTakeFrom, int bDestroy=FALSE);";
    445 IsInConversation(1) -> Int [Object]
        "int IsInConversation(object oObject);";
    446 EffectAbilityDecrease(2) -> Effect [Int, Int]
        "effect EffectAbilityDecrease(int nAbility, int nModifyBy);";
    447 EffectAttackDecrease(1) -> Effect [Int, Int]
        "effect EffectAttackDecrease(int nPenalty, int nModifierType=ATTACK_BONUS_MISC);";
    448 EffectDamageDecrease(1) -> Effect [Int, Int]
        "effect EffectDamageDecrease(int nPenalty, int nDamageType=DAMAGE_TYPE_MAGICAL);";
    449 EffectDamageImmunityDecrease(2) -> Effect [Int, Int]
        "effect EffectDamageImmunityDecrease(int nDamageType, int nPercentImmunity);";
    450 EffectACDecrease(1) -> Effect [Int, Int, Int]
        "effect EffectACDecrease(int nValue, int nModifyType=AC_DODGE_BONUS, int nDamageType=AC_VS_DAMAGE_TYPE_ALL);";
    451 EffectMovementSpeedDecrease(1) -> Effect [Int]
        "effect EffectMovementSpeedDecrease(int nPercentChange);";
    452 EffectSavingThrowDecrease(2) -> Effect [Int, Int, Int]
        "effect EffectSavingThrowDecrease(int nSave, int nValue, int nSaveType=SAVING_THROW_TYPE_ALL);";
    453 EffectSkillDecrease(2) -> Effect [Int, Int]
        "effect EffectSkillDecrease(int nSkill, int nValue);";
    454 EffectSpellResistanceDecrease(1) -> Effect [Int]
        "effect EffectSpellResistanceDecrease(int nValue);";
    455 GetPlotFlag(0) -> Int [Object]
        "int GetPlotFlag(object oTarget=OBJECT_SELF);";
    456 SetPlotFlag(2) -> Void [Object, Int]
        "void SetPlotFlag(object oTarget, int nPlotFlag);";
    457 EffectInvisibility(1) -> Effect [Int]
        "effect EffectInvisibility(int nInvisibilityType);";
    458 EffectConcealment(1) -> Effect [Int, Int]
        "effect EffectConcealment(int nPercentage, int nMissType=MISS_CHANCE_TYPE_NORMAL);";
    459 EffectDarkness(0) -> Effect []
        "effect EffectDarkness();";
    460 EffectDispelMagicAll(0) -> Effect [Int]
        "effect EffectDispelMagicAll(int nCasterLevel=USE_CREATURE_LEVEL);";
    461 EffectUltravision(0) -> Effect []
        "effect EffectUltravision();";
    462 EffectNegativeLevel(1) -> Effect [Int, Int]
        "effect EffectNegativeLevel(int nNumLevels, int bHPBonus=FALSE);";
    463 EffectPolymorph(1) -> Effect [Int, Int]
        "effect EffectPolymorph(int nPolymorphSelection, int nLocked=FALSE);";
    464 EffectSanctuary(1) -> Effect [Int]
        "effect EffectSanctuary(int nDifficultyClass);";
    465 EffectTrueSeeing(0) -> Effect []
        "effect EffectTrueSeeing();";
    466 EffectSeeInvisible(0) -> Effect []
        "effect EffectSeeInvisible();";
    467 EffectTimeStop(0) -> Effect []
        "effect EffectTimeStop();";
    468 EffectBlindness(0) -> Effect []
        "effect EffectBlindness();";
    469 GetIsReactionTypeFriendly(1) -> Int [Object, Object]
        "int GetIsReactionTypeFriendly(object oTarget, object oSource=OBJECT_SELF);";
    470 GetIsReactionTypeNeutral(1) -> Int [Object, Object]
        "int GetIsReactionTypeNeutral(object oTarget, object oSource=OBJECT_SELF);";
    471 GetIsReactionTypeHostile(1) -> Int [Object, Object]
        "int GetIsReactionTypeHostile(object oTarget, object oSource=OBJECT_SELF);";
    472 EffectSpellLevelAbsorption(1) -> Effect [Int, Int, Int]
        "effect EffectSpellLevelAbsorption(int nMaxSpellLevelAbsorbed, int nTotalSpellLevelsAbsorbed=0, int nSpellSchool=SPELL_SCHOOL_GENERAL);";
    473 EffectDispelMagicBest(0) -> Effect [Int]
        "effect EffectDispelMagicBest(int nCasterLevel=USE_CREATURE_LEVEL);";
    474 ActivatePortal(1) -> Void [Object, String, String, String, Int]
        r#"void ActivatePortal(object oTarget, string sIPaddress="", string sPassword="", string sWaypointTag="", int bSeemless=FALSE);"#;
    475 GetNumStackedItems(1) -> Int [Object]
        "int GetNumStackedItems(object oItem);";
    476 SurrenderToEnemies(0) -> Void []
        "void SurrenderToEnemies();";
    477 EffectMissChance(1) -> Effect [Int, Int]
        "effect EffectMissChance(int nPercentage, int nMissChanceType=MISS_CHANCE_TYPE_NORMAL);";
    478 GetTurnResistanceHD(0) -> Int [Object]
        "int GetTurnResistanceHD(object oUndead=OBJECT_SELF);";
    479 GetCreatureSize(1) -> Int [Object]
        "int GetCreatureSize(object oCreature);";
    480 EffectDisappearAppear(1) -> Effect [Location, Int]
        "effect EffectDisappearAppear(location lLocation, int nAnimation=1);";
    481 EffectDisappear(0) -> Effect [Int]
        "effect EffectDisappear(int nAnimation=1);";
    482 EffectAppear(0) -> Effect [Int]
        "effect EffectAppear(int nAnimation=1);";
    483 ActionUnlockObject(1) -> Void [Object]
        "void ActionUnlockObject(object oTarget);";
    484 ActionLockObject(1) -> Void [Object]
        "void ActionLockObject(object oTarget);";
    485 EffectModifyAttacks(1) -> Effect [Int]
        "effect EffectModifyAttacks(int nAttacks);";
    486 GetLastTrapDetected(0) -> Object [Object]
        "object GetLastTrapDetected(object oTarget=OBJECT_SELF);";
    487 EffectDamageShield(3) -> Effect [Int, Int, Int]
        "effect EffectDamageShield(int nDamageAmount, int nRandomAmount, int nDamageType);";
    488 GetNearestTrapToObject(0) -> Object [Object, Int]
        "object GetNearestTrapToObject(object oTarget=OBJECT_SELF, int nTrapDetected=TRUE);";
    489 GetDeity(1) -> String [Object]
        "string GetDeity(object oCreature);";
    490 GetSubRace(1) -> String [Object]
        "string GetSubRace(object oTarget);";
    491 GetFortitudeSavingThrow(1) -> Int [Object]
        "int GetFortitudeSavingThrow(object oTarget);";
    492 GetWillSavingThrow(1) -> Int [Object]
        "int GetWillSavingThrow(object oTarget);";
    493 GetReflexSavingThrow(1) -> Int [Object]
        "int GetReflexSavingThrow(object oTarget);";
    494 GetChallengeRating(1) -> Float [Object]
        "float GetChallengeRating(object oCreature);";
    495 GetAge(1) -> Int [Object]
        "int GetAge(object oCreature);";
    496 GetMovementRate(1) -> Int [Object]
        "int GetMovementRate(object oCreature);";
    497 GetFamiliarCreatureType(1) -> Int [Object]
        "int GetFamiliarCreatureType(object oCreature);";
    498 GetAnimalCompanionCreatureType(1) -> Int [Object]
        "int GetAnimalCompanionCreatureType(object oCreature);";
    499 GetFamiliarName(1) -> String [Object]
        "string GetFamiliarName(object oCreature);";
    500 GetAnimalCompanionName(1) -> String [Object]
        "string GetAnimalCompanionName(object oTarget);";
    501 ActionCastFakeSpellAtObject(2) -> Void [Int, Object, Int]
        "void ActionCastFakeSpellAtObject(int nSpell, object oTarget, int nProjectilePathType=PROJECTILE_PATH_TYPE_DEFAULT);";
    502 ActionCastFakeSpellAtLocation(2) -> Void [Int, Location, Int]
        "void ActionCastFakeSpellAtLocation(int nSpell, location lTarget, int nProjectilePathType=PROJECTILE_PATH_TYPE_DEFAULT);";
    503 RemoveSummonedAssociate(1) -> Void [Object, Object]
        "void RemoveSummonedAssociate(object oMaster, object oAssociate=OBJECT_SELF);";
    504 SetCameraMode(2) -> Void [Object, Int]
        "void SetCameraMode(object oPlayer, int nCameraMode);";
    505 GetIsResting(0) -> Int [Object]
        "int GetIsResting(object oCreature=OBJECT_SELF);";
    506 GetLastPCRested(0) -> Object []
        "object GetLastPCRested();";
    507 SetWeather(2) -> Void [Object, Int]
        "void SetWeather(object oTarget, int nWeather);";
    508 GetLastRestEventType(0) -> Int []
        "int GetLastRestEventType();";
    509 StartNewModule(1) -> Void [String]
        "void StartNewModule(string sModuleName);";
    510 EffectSwarm(2) -> Effect [Int, String, String, String, String]
        r#"effect EffectSwarm(int nLooping, string sCreatureTemplate1, string sCreatureTemplate2="", string sCreatureTemplate3="", string sCreatureTemplate4="");"#;
    511 GetWeaponRanged(1) -> Int [Object]
        "int GetWeaponRanged(object oItem);";
    512 DoSinglePlayerAutoSave(0) -> Void []
        "void DoSinglePlayerAutoSave();";
    513 GetGameDifficulty(0) -> Int []
        "int GetGameDifficulty();";
    514 SetTileMainLightColor(3) -> Void [Location, Int, Int]
        "void SetTileMainLightColor(location lTileLocation, int nMainLight1Color, int nMainLight2Color);";
    515 SetTileSourceLightColor(3) -> Void [Location, Int, Int]
        "void SetTileSourceLightColor(location lTileLocation, int nSourceLight1Color, int nSourceLight2Color);";
    516 RecomputeStaticLighting(1) -> Void [Object]
        "void RecomputeStaticLighting(object oArea);";
    517 GetTileMainLight1Color(1) -> Int [Location]
        "int GetTileMainLight1Color(location lTile);";
    518 GetTileMainLight2Color(1) -> Int [Location]
        "int GetTileMainLight2Color(location lTile);";
    519 GetTileSourceLight1Color(1) -> Int [Location]
        "int GetTileSourceLight1Color(location lTile);";
    520 GetTileSourceLight2Color(1) -> Int [Location]
        "int GetTileSourceLight2Color(location lTile);";
    521 SetPanelButtonFlash(3) -> Void [Object, Int, Int]
        "void SetPanelButtonFlash(object oPlayer, int nButton, int nEnableFlash);";
    522 GetCurrentAction(0) -> Int [Object]
        "int GetCurrentAction(object oObject=OBJECT_SELF);";
    523 SetStandardFactionReputation(2) -> Void [Int, Int, Object]
        "void SetStandardFactionReputation(int nStandardFaction, int nNewReputation, object oCreature=OBJECT_SELF);";
    524 GetStandardFactionReputation(1) -> Int [Int, Object]
        "int GetStandardFactionReputation(int nStandardFaction, object oCreature=OBJECT_SELF);";
    525 FloatingTextStrRefOnCreature(2) -> Void [Int, Object, Int]
        "void FloatingTextStrRefOnCreature(int nStrRefToDisplay, object oCreatureToFloatAbove, int bBroadcastToFaction=TRUE);";
    526 FloatingTextStringOnCreature(2) -> Void [String, Object, Int]
        "void FloatingTextStringOnCreature(string sStringToDisplay, object oCreatureToFloatAbove, int bBroadcastToFaction=TRUE);";
    527 GetTrapDisarmable(1) -> Int [Object]
        "int GetTrapDisarmable(object oTrapObject);";
    528 GetTrapDetectable(1) -> Int [Object]
        "int GetTrapDetectable(object oTrapObject);";
    529 GetTrapDetectedBy(2) -> Int [Object, Object]
        "int GetTrapDetectedBy(object oTrapObject, object oCreature);";
    530 GetTrapFlagged(1) -> Int [Object]
        "int GetTrapFlagged(object oTrapObject);";
    531 GetTrapBaseType(1) -> Int [Object]
        "int GetTrapBaseType(object oTrapObject);";
    532 GetTrapOneShot(1) -> Int [Object]
        "int GetTrapOneShot(object oTrapObject);";
    533 GetTrapCreator(1) -> Object [Object]
        "object GetTrapCreator(object oTrapObject);";
    534 GetTrapKeyTag(1) -> String [Object]
        "string GetTrapKeyTag(object oTrapObject);";
    535 GetTrapDisarmDC(1) -> Int [Object]
        "int GetTrapDisarmDC(object oTrapObject);";
    536 GetTrapDetectDC(1) -> Int [Object]
        "int GetTrapDetectDC(object oTrapObject);";
    537 GetLockKeyRequired(1) -> Int [Object]
        "int GetLockKeyRequired(object oObject);";
    538 GetLockKeyTag(1) -> String [Object]
        "string GetLockKeyTag(object oObject);";
    539 GetLockLockable(1) -> Int [Object]
        "int GetLockLockable(object oObject);";
    540 GetLockUnlockDC(1) -> Int [Object]
        "int GetLockUnlockDC(object oObject);";
    541 GetLockLockDC(1) -> Int [Object]
        "int GetLockLockDC(object oObject);";
    542 GetPCLevellingUp(0) -> Object []
        "object GetPCLevellingUp();";
    543 GetHasFeatEffect(1) -> Int [Int, Object]
        "int GetHasFeatEffect(int nFeat, object oObject=OBJECT_SELF);";
    544 SetPlaceableIllumination(0) -> Void [Object, Int]
        "void SetPlaceableIllumination(object oPlaceable=OBJECT_SELF, int bIlluminate=TRUE);";
    545 GetPlaceableIllumination(0) -> Int [Object]
        "int GetPlaceableIllumination(object oPlaceable=OBJECT_SELF);";
    546 GetIsPlaceableObjectActionPossible(2) -> Int [Object, Int]
        "int GetIsPlaceableObjectActionPossible(object oPlaceable, int nPlaceableAction);";
    547 DoPlaceableObjectAction(2) -> Void [Object, Int]
        "void DoPlaceableObjectAction(object oPlaceable, int nPlaceableAction);";
    548 GetFirstPC(0) -> Object []
        "object GetFirstPC();";
    549 GetNextPC(0) -> Object []
        "object GetNextPC();";
    550 SetTrapDetectedBy(2) -> Int [Object, Object, Int]
        "int SetTrapDetectedBy(object oTrap, object oDetector, int bDetected=TRUE);";
    551 GetIsTrapped(1) -> Int [Object]
        "int GetIsTrapped(object oObject);";
    552 EffectTurnResistanceDecrease(1) -> Effect [Int]
        "effect EffectTurnResistanceDecrease(int nHitDice);";
    553 EffectTurnResistanceIncrease(1) -> Effect [Int]
        "effect EffectTurnResistanceIncrease(int nHitDice);";
    554 PopUpDeathGUIPanel(1) -> Void [Object, Int, Int, Int, String]
        r#"void PopUpDeathGUIPanel(object oPC, int bRespawnButtonEnabled=TRUE, int bWaitForHelpButtonEnabled=TRUE, int nHelpStringReference=0, string sHelpString="");"#;
    555 SetTrapDisabled(1) -> Void [Object]
        "void SetTrapDisabled(object oTrap);";
    556 GetLastHostileActor(0) -> Object [Object]
        "object GetLastHostileActor(object oVictim=OBJECT_SELF);";
    557 ExportAllCharacters(0) -> Void []
        "void ExportAllCharacters();";
    558 MusicBackgroundGetDayTrack(1) -> Int [Object]
        "int MusicBackgroundGetDayTrack(object oArea);";
    559 MusicBackgroundGetNightTrack(1) -> Int [Object]
        "int MusicBackgroundGetNightTrack(object oArea);";
    560 WriteTimestampedLogEntry(1) -> Void [String]
        "void WriteTimestampedLogEntry(string sLogEntry);";
    561 GetModuleName(0) -> String []
        "string GetModuleName();";
    562 GetFactionLeader(1) -> Object [Object]
        "object GetFactionLeader(object oMemberOfFaction);";
    563 SendMessageToAllDMs(1) -> Void [String]
        "void SendMessageToAllDMs(string szMessage);";
    564 EndGame(1) -> Void [String]
        "void EndGame(string sEndMovie);";
    565 BootPC(1) -> Void [Object]
        "void BootPC(object oPlayer);";
    566 ActionCounterSpell(1) -> Void [Object]
        "void ActionCounterSpell(object oCounterSpellTarget);";
    567 AmbientSoundSetDayVolume(2) -> Void [Object, Int]
        "void AmbientSoundSetDayVolume(object oArea, int nVolume);";
    568 AmbientSoundSetNightVolume(2) -> Void [Object, Int]
        "void AmbientSoundSetNightVolume(object oArea, int nVolume);";
    569 MusicBackgroundGetBattleTrack(1) -> Int [Object]
        "int MusicBackgroundGetBattleTrack(object oArea);";
    570 GetHasInventory(1) -> Int [Object]
        "int GetHasInventory(object oObject);";
    571 GetStrRefSoundDuration(1) -> Float [Int]
        "float GetStrRefSoundDuration(int nStrRef);";
    572 AddToParty(2) -> Void [Object, Object]
        "void AddToParty(object oPC, object oPartyLeader);";
    573 RemoveFromParty(1) -> Void [Object]
        "void RemoveFromParty(object oPC);";
    574 GetStealthMode(1) -> Int [Object]
        "int GetStealthMode(object oCreature);";
    575 GetDetectMode(1) -> Int [Object]
        "int GetDetectMode(object oCreature);";
    576 GetDefensiveCastingMode(1) -> Int [Object]
        "int GetDefensiveCastingMode(object oCreature);";
    577 GetAppearanceType(1) -> Int [Object]
        "int GetAppearanceType(object oCreature);";
    578 SpawnScriptDebugger(0) -> Void []
        "void SpawnScriptDebugger();";
    579 GetModuleItemAcquiredStackSize(0) -> Int []
        "int GetModuleItemAcquiredStackSize();";
    580 DecrementRemainingFeatUses(2) -> Void [Object, Int]
        "void DecrementRemainingFeatUses(object oCreature, int nFeat);";
    581 DecrementRemainingSpellUses(2) -> Void [Object, Int]
        "void DecrementRemainingSpellUses(object oCreature, int nSpell);";
    582 GetResRef(1) -> String [Object]
        "string GetResRef(object oObject);";
    583 EffectPetrify(0) -> Effect []
        "effect EffectPetrify();";
    584 CopyItem(1) -> Object [Object, Object, Int]
        "object CopyItem(object oItem, object oTargetInventory=OBJECT_INVALID, int bCopyVars=FALSE);";
    585 EffectCutsceneParalyze(0) -> Effect []
        "effect EffectCutsceneParalyze();";
    586 GetDroppableFlag(1) -> Int [Object]
        "int GetDroppableFlag(object oItem);";
    587 GetUseableFlag(0) -> Int [Object]
        "int GetUseableFlag(object oObject=OBJECT_SELF);";
    588 GetStolenFlag(1) -> Int [Object]
        "int GetStolenFlag(object oStolen);";
    589 SetCampaignFloat(3) -> Void [String, String, Float, Object]
        "void SetCampaignFloat(string sCampaignName, string sVarName, float flFloat, object oPlayer=OBJECT_INVALID);";
    590 SetCampaignInt(3) -> Void [String, String, Int, Object]
        "void SetCampaignInt(string sCampaignName, string sVarName, int nInt, object oPlayer=OBJECT_INVALID);";
    591 SetCampaignVector(3) -> Void [String, String, Vector, Object]
        "void SetCampaignVector(string sCampaignName, string sVarName, vector vVector, object oPlayer=OBJECT_INVALID);";
    592 SetCampaignLocation(3) -> Void [String, String, Location, Object]
        "void SetCampaignLocation(string sCampaignName, string sVarName, location locLocation, object oPlayer=OBJECT_INVALID);";
    593 SetCampaignString(3) -> Void [String, String, String, Object]
        "void SetCampaignString(string sCampaignName, string sVarName, string sString, object oPlayer=OBJECT_INVALID);";
    594 DestroyCampaignDatabase(1) -> Void [String]
        "void DestroyCampaignDatabase(string sCampaignName);";
    595 GetCampaignFloat(2) -> Float [String, String, Object]
        "float GetCampaignFloat(string sCampaignName, string sVarName, object oPlayer=OBJECT_INVALID);";
    596 GetCampaignInt(2) -> Int [String, String, Object]
        "int GetCampaignInt(string sCampaignName, string sVarName, object oPlayer=OBJECT_INVALID);";
    597 GetCampaignVector(2) -> Vector [String, String, Object]
        "vector GetCampaignVector(string sCampaignName, string sVarName, object oPlayer=OBJECT_INVALID);";
    598 GetCampaignLocation(2) -> Location [String, String, Object]
        "location GetCampaignLocation(string sCampaignName, string sVarName, object oPlayer=OBJECT_INVALID);";
    599 GetCampaignString(2) -> String [String, String, Object]
        "string GetCampaignString(string sCampaignName, string sVarName, object oPlayer=OBJECT_INVALID);";
    600 CopyObject(2) -> Object [Object, Location, Object, String]
        r#"object CopyObject(object oSource, location locLocation, object oOwner=OBJECT_INVALID, string sNewTag="");"#;
    601 DeleteCampaignVariable(2) -> Void [String, String, Object]
        "void DeleteCampaignVariable(string sCampaignName, string sVarName, object oPlayer=OBJECT_INVALID);";
    602 StoreCampaignObject(3) -> Int [String, String, Object, Object]
        "int StoreCampaignObject(string sCampaignName, string sVarName, object oObject, object oPlayer=OBJECT_INVALID);";
    603 RetrieveCampaignObject(3) -> Object [String, String, Location, Object, Object]
        "object RetrieveCampaignObject(string sCampaignName, string sVarName, location locLocation, object oOwner=OBJECT_INVALID, object oPlayer=OBJECT_INVALID);";
    604 EffectCutsceneDominated(0) -> Effect []
        "effect EffectCutsceneDominated();";
    605 GetItemStackSize(1) -> Int [Object]
        "int GetItemStackSize(object oItem);";
    606 SetItemStackSize(2) -> Void [Object, Int]
        "void SetItemStackSize(object oItem, int nSize);";
    607 GetItemCharges(1) -> Int [Object]
        "int GetItemCharges(object oItem);";
    608 SetItemCharges(2) -> Void [Object, Int]
        "void SetItemCharges(object oItem, int nCharges);";
    609 AddItemProperty(3) -> Void [Int, ItemProperty, Object, Float]
        "void AddItemProperty(int nDurationType, itemproperty ipProperty, object oItem, float fDuration=0.0f);";
    610 RemoveItemProperty(2) -> Void [Object, ItemProperty]
        "void RemoveItemProperty(object oItem, itemproperty ipProperty);";
    611 GetIsItemPropertyValid(1) -> Int [ItemProperty]
        "int GetIsItemPropertyValid(itemproperty ipProperty);";
    612 GetFirstItemProperty(1) -> ItemProperty [Object]
        "itemproperty GetFirstItemProperty(object oItem);";
    613 GetNextItemProperty(1) -> ItemProperty [Object]
        "itemproperty GetNextItemProperty(object oItem);";
    614 GetItemPropertyType(1) -> Int [ItemProperty]
        "int GetItemPropertyType(itemproperty ip);";
    615 GetItemPropertyDurationType(1) -> Int [ItemProperty]
        "int GetItemPropertyDurationType(itemproperty ip);";
    616 ItemPropertyAbilityBonus(2) -> ItemProperty [Int, Int]
        "itemproperty ItemPropertyAbilityBonus(int nAbility, int nBonus);";
    617 ItemPropertyACBonus(1) -> ItemProperty [Int]
        "itemproperty ItemPropertyACBonus(int nBonus);";
    618 ItemPropertyACBonusVsAlign(2) -> ItemProperty [Int, Int]
        "itemproperty ItemPropertyACBonusVsAlign(int nAlignGroup, int nACBonus);";
    619 ItemPropertyACBonusVsDmgType(2) -> ItemProperty [Int, Int]
        "itemproperty ItemPropertyACBonusVsDmgType(int nDamageType, int nACBonus);";
    620 ItemPropertyACBonusVsRace(2) -> ItemProperty [Int, Int]
        "itemproperty ItemPropertyACBonusVsRace(int nRace, int nACBonus);";
    621 ItemPropertyACBonusVsSAlign(2) -> ItemProperty [Int, Int]
        "itemproperty ItemPropertyACBonusVsSAlign(int nAlign, int nACBonus);";
    622 ItemPropertyEnhancementBonus(1) -> ItemProperty [Int]
        "itemproperty ItemPropertyEnhancementBonus(int nEnhancementBonus);";
    623 ItemPropertyEnhancementBonusVsAlign(2) -> ItemProperty [Int, Int]
        "itemproperty ItemPropertyEnhancementBonusVsAlign(int nAlignGroup, int nBonus);";
    624 ItemPropertyEnhancementBonusVsRace(2) -> ItemProperty [Int, Int]
        "itemproperty ItemPropertyEnhancementBonusVsRace(int nRace, int nBonus);";
    625 ItemPropertyEnhancementBonusVsSAlign(2) -> ItemProperty [Int, Int]
        "itemproperty ItemPropertyEnhancementBonusVsSAlign(int nAlign, int nBonus);";
    626 ItemPropertyEnhancementPenalty(1) -> ItemProperty [Int]
        "itemproperty ItemPropertyEnhancementPenalty(int nPenalty);";
    627 ItemPropertyWeightReduction(1) -> ItemProperty [Int]
        "itemproperty ItemPropertyWeightReduction(int nReduction);";
    628 ItemPropertyBonusFeat(1) -> ItemProperty [Int]
        "itemproperty ItemPropertyBonusFeat(int nFeat);";
    629 ItemPropertyBonusLevelSpell(2) -> ItemProperty [Int, Int]
        "itemproperty ItemPropertyBonusLevelSpell(int nClass, int nSpellLevel);";
    630 ItemPropertyCastSpell(2) -> ItemProperty [Int, Int]
        "itemproperty ItemPropertyCastSpell(int nSpell, int nNumUses);";
    631 ItemPropertyDamageBonus(2) -> ItemProperty [Int, Int]
        "itemproperty ItemPropertyDamageBonus(int nDamageType, int nDamage);";
    632 ItemPropertyDamageBonusVsAlign(3) -> ItemProperty [Int, Int, Int]
        "itemproperty ItemPropertyDamageBonusVsAlign(int nAlignGroup, int nDamageType, int nDamage);";
    633 ItemPropertyDamageBonusVsRace(3) -> ItemProperty [Int, Int, Int]
        "itemproperty ItemPropertyDamageBonusVsRace(int nRace, int nDamageType, int nDamage);";
    634 ItemPropertyDamageBonusVsSAlign(3) -> ItemProperty [Int, Int, Int]
        "itemproperty ItemPropertyDamageBonusVsSAlign(int nAlign, int nDamageType, int nDamage);";
    635 ItemPropertyDamageImmunity(2) -> ItemProperty [Int, Int]
        "itemproperty ItemPropertyDamageImmunity(int nDamageType, int nImmuneBonus);";
    636 ItemPropertyDamagePenalty(1) -> ItemProperty [Int]
        "itemproperty ItemPropertyDamagePenalty(int nPenalty);";
    637 ItemPropertyDamageReduction(2) -> ItemProperty [Int, Int]
        "itemproperty ItemPropertyDamageReduction(int nEnhancement, int nHPSoak);";
    638 ItemPropertyDamageResistance(2) -> ItemProperty [Int, Int]
        "itemproperty ItemPropertyDamageResistance(int nDamageType, int nHPResist);";
    639 ItemPropertyDamageVulnerability(2) -> ItemProperty [Int, Int]
        "itemproperty ItemPropertyDamageVulnerability(int nDamageType, int nVulnerability);";
    640 ItemPropertyDarkvision(0) -> ItemProperty []
        "itemproperty ItemPropertyDarkvision();";
    641 ItemPropertyDecreaseAbility(2) -> ItemProperty [Int, Int]
        "itemproperty ItemPropertyDecreaseAbility(int nAbility, int nModifier);";
    642 ItemPropertyDecreaseAC(2) -> ItemProperty [Int, Int]
        "itemproperty ItemPropertyDecreaseAC(int nModifierType, int nPenalty);";
    643 ItemPropertyDecreaseSkill(2) -> ItemProperty [Int, Int]
        "itemproperty ItemPropertyDecreaseSkill(int nSkill, int nPenalty);";
    644 ItemPropertyContainerReducedWeight(1) -> ItemProperty [Int]
        "itemproperty ItemPropertyContainerReducedWeight(int nContainerType);";
    645 ItemPropertyExtraMeleeDamageType(1) -> ItemProperty [Int]
        "itemproperty ItemPropertyExtraMeleeDamageType(int nDamageType);";
    646 ItemPropertyExtraRangeDamageType(1) -> ItemProperty [Int]
        "itemproperty ItemPropertyExtraRangeDamageType(int nDamageType);";
    647 ItemPropertyHaste(0) -> ItemProperty []
        "itemproperty ItemPropertyHaste();";
    648 ItemPropertyHolyAvenger(0) -> ItemProperty []
        "itemproperty ItemPropertyHolyAvenger();";
    649 ItemPropertyImmunityMisc(1) -> ItemProperty [Int]
        "itemproperty ItemPropertyImmunityMisc(int nImmunityType);";
    650 ItemPropertyImprovedEvasion(0) -> ItemProperty []
        "itemproperty ItemPropertyImprovedEvasion();";
    651 ItemPropertyBonusSpellResistance(1) -> ItemProperty [Int]
        "itemproperty ItemPropertyBonusSpellResistance(int nBonus);";
    652 ItemPropertyBonusSavingThrowVsX(2) -> ItemProperty [Int, Int]
        "itemproperty ItemPropertyBonusSavingThrowVsX(int nBonusType, int nBonus);";
    653 ItemPropertyBonusSavingThrow(2) -> ItemProperty [Int, Int]
        "itemproperty ItemPropertyBonusSavingThrow(int nBaseSaveType, int nBonus);";
    654 ItemPropertyKeen(0) -> ItemProperty []
        "itemproperty ItemPropertyKeen();";
    655 ItemPropertyLight(2) -> ItemProperty [Int, Int]
        "itemproperty ItemPropertyLight(int nBrightness, int nColor);";
    656 ItemPropertyMaxRangeStrengthMod(1) -> ItemProperty [Int]
        "itemproperty ItemPropertyMaxRangeStrengthMod(int nModifier);";
    657 ItemPropertyNoDamage(0) -> ItemProperty []
        "itemproperty ItemPropertyNoDamage();";
    658 ItemPropertyOnHitProps(2) -> ItemProperty [Int, Int, Int]
        "itemproperty ItemPropertyOnHitProps(int nProperty, int nSaveDC, int nSpecial=0);";
    659 ItemPropertyReducedSavingThrowVsX(2) -> ItemProperty [Int, Int]
        "itemproperty ItemPropertyReducedSavingThrowVsX(int nBaseSaveType, int nPenalty);";
    660 ItemPropertyReducedSavingThrow(2) -> ItemProperty [Int, Int]
        "itemproperty ItemPropertyReducedSavingThrow(int nBonusType, int nPenalty);";
    661 ItemPropertyRegeneration(1) -> ItemProperty [Int]
        "itemproperty ItemPropertyRegeneration(int nRegenAmount);";
    662 ItemPropertySkillBonus(2) -> ItemProperty [Int, Int]
        "itemproperty ItemPropertySkillBonus(int nSkill, int nBonus);";
    663 ItemPropertySpellImmunitySpecific(1) -> ItemProperty [Int]
        "itemproperty ItemPropertySpellImmunitySpecific(int nSpell);";
    664 ItemPropertySpellImmunitySchool(1) -> ItemProperty [Int]
        "itemproperty ItemPropertySpellImmunitySchool(int nSchool);";
    665 ItemPropertyThievesTools(1) -> ItemProperty [Int]
        "itemproperty ItemPropertyThievesTools(int nModifier);";
    666 ItemPropertyAttackBonus(1) -> ItemProperty [Int]
        "itemproperty ItemPropertyAttackBonus(int nBonus);";
    667 ItemPropertyAttackBonusVsAlign(2) -> ItemProperty [Int, Int]
        "itemproperty ItemPropertyAttackBonusVsAlign(int nAlignGroup, int nBonus);";
    668 ItemPropertyAttackBonusVsRace(2) -> ItemProperty [Int, Int]
        "itemproperty ItemPropertyAttackBonusVsRace(int nRace, int nBonus);";
    669 ItemPropertyAttackBonusVsSAlign(2) -> ItemProperty [Int, Int]
        "itemproperty ItemPropertyAttackBonusVsSAlign(int nAlignment, int nBonus);";
    670 ItemPropertyAttackPenalty(1) -> ItemProperty [Int]
        "itemproperty ItemPropertyAttackPenalty(int nPenalty);";
    671 ItemPropertyUnlimitedAmmo(0) -> ItemProperty [Int]
        "itemproperty ItemPropertyUnlimitedAmmo(int nDamage=IP_CONST_UNLIMITEDAMMO_BASIC);";
    672 ItemPropertyLimitUseByAlign(1) -> ItemProperty [Int]
        "itemproperty ItemPropertyLimitUseByAlign(int nAlignGroup);";
    673 ItemPropertyLimitUseByClass(1) -> ItemProperty [Int]
        "itemproperty ItemPropertyLimitUseByClass(int nClass);";
    674 ItemPropertyLimitUseByRace(1) -> ItemProperty [Int]
        "itemproperty ItemPropertyLimitUseByRace(int nRace);";
    675 ItemPropertyLimitUseBySAlign(1) -> ItemProperty [Int]
        "itemproperty ItemPropertyLimitUseBySAlign(int nAlignment);";
    676 ItemPropertyBonusHitpoints(1) -> ItemProperty [Int]
        "itemproperty ItemPropertyBonusHitpoints(int nBonusType);";
    677 ItemPropertyVampiricRegeneration(1) -> ItemProperty [Int]
        "itemproperty ItemPropertyVampiricRegeneration(int nRegenAmount);";
    678 ItemPropertyTrap(2) -> ItemProperty [Int, Int]
        "itemproperty ItemPropertyTrap(int nTrapLevel, int nTrapType);";
    679 ItemPropertyTrueSeeing(0) -> ItemProperty []
        "itemproperty ItemPropertyTrueSeeing();";
    680 ItemPropertyOnMonsterHitProperties(1) -> ItemProperty [Int, Int]
        "itemproperty ItemPropertyOnMonsterHitProperties(int nProperty, int nSpecial=0);";
    681 ItemPropertyTurnResistance(1) -> ItemProperty [Int]
        "itemproperty ItemPropertyTurnResistance(int nModifier);";
    682 ItemPropertyMassiveCritical(1) -> ItemProperty [Int]
        "itemproperty ItemPropertyMassiveCritical(int nDamage);";
    683 ItemPropertyFreeAction(0) -> ItemProperty []
        "itemproperty ItemPropertyFreeAction();";
    684 ItemPropertyMonsterDamage(1) -> ItemProperty [Int]
        "itemproperty ItemPropertyMonsterDamage(int nDamage);";
    685 ItemPropertyImmunityToSpellLevel(1) -> ItemProperty [Int]
        "itemproperty ItemPropertyImmunityToSpellLevel(int nLevel);";
    686 ItemPropertySpecialWalk(0) -> ItemProperty [Int]
        "itemproperty ItemPropertySpecialWalk(int nWalkType=0);";
    687 ItemPropertyHealersKit(1) -> ItemProperty [Int]
        "itemproperty ItemPropertyHealersKit(int nModifier);";
    688 ItemPropertyWeightIncrease(1) -> ItemProperty [Int]
        "itemproperty ItemPropertyWeightIncrease(int nWeight);";
    689 GetIsSkillSuccessful(3) -> Int [Object, Int, Int]
        "int GetIsSkillSuccessful(object oTarget, int nSkill, int nDifficulty);";
    690 EffectSpellFailure(0) -> Effect [Int, Int]
        "effect EffectSpellFailure(int nPercent=100, int nSpellSchool=SPELL_SCHOOL_GENERAL);";
    691 SpeakStringByStrRef(1) -> Void [Int, Int]
        "void SpeakStringByStrRef(int nStrRef, int nTalkVolume=TALKVOLUME_TALK);";
    692 SetCutsceneMode(1) -> Void [Object, Int, Int]
        "void SetCutsceneMode(object oCreature, int nInCutscene=TRUE, int nLeftClickingEnabled=FALSE);";
    693 GetLastPCToCancelCutscene(0) -> Object []
        "object GetLastPCToCancelCutscene();";
    694 GetDialogSoundLength(1) -> Float [Int]
        "float GetDialogSoundLength(int nStrRef);";
    695 FadeFromBlack(1) -> Void [Object, Float]
        "void FadeFromBlack(object oCreature, float fSpeed=FADE_SPEED_MEDIUM);";
    696 FadeToBlack(1) -> Void [Object, Float]
        "void FadeToBlack(object oCreature, float fSpeed=FADE_SPEED_MEDIUM);";
    697 StopFade(1) -> Void [Object]
        "void StopFade(object oCreature);";
    698 BlackScreen(1) -> Void [Object]
        "void BlackScreen(object oCreature);";
    699 GetBaseAttackBonus(1) -> Int [Object]
        "int GetBaseAttackBonus(object oCreature);";
    700 SetImmortal(2) -> Void [Object, Int]
        "void SetImmortal(object oCreature, int bImmortal);";
    701 OpenInventory(2) -> Void [Object, Object]
        "void OpenInventory(object oCreature, object oPlayer);";
    702 StoreCameraFacing(0) -> Void []
        "void StoreCameraFacing();";
    703 RestoreCameraFacing(0) -> Void []
        "void RestoreCameraFacing();";
    704 LevelUpHenchman(1) -> Int [Object, Int, Int, Int]
        "int LevelUpHenchman(object oCreature, int nClass=CLASS_TYPE_INVALID, int bReadyAllSpells=FALSE, int nPackage=PACKAGE_INVALID);";
    705 SetDroppableFlag(2) -> Void [Object, Int]
        "void SetDroppableFlag(object oItem, int bDroppable);";
    706 GetWeight(0) -> Int [Object]
        "int GetWeight(object oTarget=OBJECT_SELF);";
    707 GetModuleItemAcquiredBy(0) -> Object []
        "object GetModuleItemAcquiredBy();";
    708 GetImmortal(0) -> Int [Object]
        "int GetImmortal(object oTarget=OBJECT_SELF);";
    709 DoWhirlwindAttack(0) -> Void [Int, Int]
        "void DoWhirlwindAttack(int bDisplayFeedback=TRUE, int bImproved=FALSE);";
    710 Get2DAString(3) -> String [String, String, Int]
        "string Get2DAString(string s2DA, string sColumn, int nRow);";
    711 EffectEthereal(0) -> Effect []
        "effect EffectEthereal();";
    712 GetAILevel(0) -> Int [Object]
        "int GetAILevel(object oTarget=OBJECT_SELF);";
    713 SetAILevel(2) -> Void [Object, Int]
        "void SetAILevel(object oTarget, int nAILevel);";
    714 GetIsPossessedFamiliar(1) -> Int [Object]
        "int GetIsPossessedFamiliar(object oCreature);";
    715 UnpossessFamiliar(1) -> Void [Object]
        "void UnpossessFamiliar(object oCreature);";
    716 GetIsAreaInterior(0) -> Int [Object]
        "int GetIsAreaInterior(object oArea=OBJECT_INVALID);";
    717 SendMessageToPCByStrRef(2) -> Void [Object, Int]
        "void SendMessageToPCByStrRef(object oPlayer, int nStrRef);";
    718 IncrementRemainingFeatUses(2) -> Void [Object, Int]
        "void IncrementRemainingFeatUses(object oCreature, int nFeat);";
    719 ExportSingleCharacter(1) -> Void [Object]
        "void ExportSingleCharacter(object oPlayer);";
    720 PlaySoundByStrRef(1) -> Void [Int, Int]
        "void PlaySoundByStrRef(int nStrRef, int nRunAsAction=TRUE);";
    721 SetSubRace(2) -> Void [Object, String]
        "void SetSubRace(object oCreature, string sSubRace);";
    722 SetDeity(2) -> Void [Object, String]
        "void SetDeity(object oCreature, string sDeity);";
    723 GetIsDMPossessed(1) -> Int [Object]
        "int GetIsDMPossessed(object oCreature);";
    724 GetWeather(1) -> Int [Object]
        "int GetWeather(object oArea);";
    725 GetIsAreaNatural(1) -> Int [Object]
        "int GetIsAreaNatural(object oArea);";
    726 GetIsAreaAboveGround(1) -> Int [Object]
        "int GetIsAreaAboveGround(object oArea);";
    727 GetPCItemLastEquipped(0) -> Object []
        "object GetPCItemLastEquipped();";
    728 GetPCItemLastEquippedBy(0) -> Object []
        "object GetPCItemLastEquippedBy();";
    729 GetPCItemLastUnequipped(0) -> Object []
        "object GetPCItemLastUnequipped();";
    730 GetPCItemLastUnequippedBy(0) -> Object []
        "object GetPCItemLastUnequippedBy();";
    731 CopyItemAndModify(4) -> Object [Object, Int, Int, Int, Int]
        "object CopyItemAndModify(object oItem, int nType, int nIndex, int nNewValue, int bCopyVars=FALSE);";
    732 GetItemAppearance(3) -> Int [Object, Int, Int]
        "int GetItemAppearance(object oItem, int nType, int nIndex);";
    733 ItemPropertyOnHitCastSpell(2) -> ItemProperty [Int, Int]
        "itemproperty ItemPropertyOnHitCastSpell(int nSpell, int nLevel);";
    734 GetItemPropertySubType(1) -> Int [ItemProperty]
        "int GetItemPropertySubType(itemproperty iProperty);";
    735 GetActionMode(2) -> Int [Object, Int]
        "int GetActionMode(object oCreature, int nMode);";
    736 SetActionMode(3) -> Void [Object, Int, Int]
        "void SetActionMode(object oCreature, int nMode, int nStatus);";
    737 GetArcaneSpellFailure(1) -> Int [Object]
        "int GetArcaneSpellFailure(object oCreature);";
    738 ActionExamine(1) -> Void [Object]
        "void ActionExamine(object oExamine);";
    739 ItemPropertyVisualEffect(1) -> ItemProperty [Int]
        "itemproperty ItemPropertyVisualEffect(int nEffect);";
    740 SetLootable(2) -> Void [Object, Int]
        "void SetLootable(object oCreature, int bLootable);";
    741 GetLootable(1) -> Int [Object]
        "int GetLootable(object oCreature);";
    742 GetCutsceneCameraMoveRate(1) -> Float [Object]
        "float GetCutsceneCameraMoveRate(object oCreature);";
    743 SetCutsceneCameraMoveRate(2) -> Void [Object, Float]
        "void SetCutsceneCameraMoveRate(object oCreature, float fRate);";
    744 GetItemCursedFlag(1) -> Int [Object]
        "int GetItemCursedFlag(object oItem);";
    745 SetItemCursedFlag(2) -> Void [Object, Int]
        "void SetItemCursedFlag(object oItem, int nCursed);";
    746 SetMaxHenchmen(1) -> Void [Int]
        "void SetMaxHenchmen(int nNumHenchmen);";
    747 GetMaxHenchmen(0) -> Int []
        "int GetMaxHenchmen();";
    748 GetAssociateType(1) -> Int [Object]
        "int GetAssociateType(object oAssociate);";
    749 GetSpellResistance(1) -> Int [Object]
        "int GetSpellResistance(object oCreature);";
    750 DayToNight(1) -> Void [Object, Float]
        "void DayToNight(object oPlayer, float fTransitionTime=0.0f);";
    751 NightToDay(1) -> Void [Object, Float]
        "void NightToDay(object oPlayer, float fTransitionTime=0.0f);";
    752 LineOfSightObject(2) -> Int [Object, Object]
        "int LineOfSightObject(object oSource, object oTarget);";
    753 LineOfSightVector(2) -> Int [Vector, Vector]
        "int LineOfSightVector(vector vSource, vector vTarget);";
    754 GetLastSpellCastClass(0) -> Int []
        "int GetLastSpellCastClass();";
    755 SetBaseAttackBonus(1) -> Void [Int, Object]
        "void SetBaseAttackBonus(int nBaseAttackBonus, object oCreature=OBJECT_SELF);";
    756 RestoreBaseAttackBonus(0) -> Void [Object]
        "void RestoreBaseAttackBonus(object oCreature=OBJECT_SELF);";
    757 EffectCutsceneGhost(0) -> Effect []
        "effect EffectCutsceneGhost();";
    758 ItemPropertyArcaneSpellFailure(1) -> ItemProperty [Int]
        "itemproperty ItemPropertyArcaneSpellFailure(int nModLevel);";
    759 GetStoreGold(1) -> Int [Object]
        "int GetStoreGold(object oidStore);";
    760 SetStoreGold(2) -> Void [Object, Int]
        "void SetStoreGold(object oidStore, int nGold);";
    761 GetStoreMaxBuyPrice(1) -> Int [Object]
        "int GetStoreMaxBuyPrice(object oidStore);";
    762 SetStoreMaxBuyPrice(2) -> Void [Object, Int]
        "void SetStoreMaxBuyPrice(object oidStore, int nMaxBuy);";
    763 GetStoreIdentifyCost(1) -> Int [Object]
        "int GetStoreIdentifyCost(object oidStore);";
    764 SetStoreIdentifyCost(2) -> Void [Object, Int]
        "void SetStoreIdentifyCost(object oidStore, int nCost);";
    765 SetCreatureAppearanceType(2) -> Void [Object, Int]
        "void SetCreatureAppearanceType(object oCreature, int nAppearanceType);";
    766 GetCreatureStartingPackage(1) -> Int [Object]
        "int GetCreatureStartingPackage(object oCreature);";
    767 EffectCutsceneImmobilize(0) -> Effect []
        "effect EffectCutsceneImmobilize();";
    768 GetIsInSubArea(1) -> Int [Object, Object]
        "int GetIsInSubArea(object oCreature, object oSubArea=OBJECT_SELF);";
    769 GetItemPropertyCostTable(1) -> Int [ItemProperty]
        "int GetItemPropertyCostTable(itemproperty iProp);";
    770 GetItemPropertyCostTableValue(1) -> Int [ItemProperty]
        "int GetItemPropertyCostTableValue(itemproperty iProp);";
    771 GetItemPropertyParam1(1) -> Int [ItemProperty]
        "int GetItemPropertyParam1(itemproperty iProp);";
    772 GetItemPropertyParam1Value(1) -> Int [ItemProperty]
        "int GetItemPropertyParam1Value(itemproperty iProp);";
    773 GetIsCreatureDisarmable(1) -> Int [Object]
        "int GetIsCreatureDisarmable(object oCreature);";
    774 SetStolenFlag(2) -> Void [Object, Int]
        "void SetStolenFlag(object oItem, int nStolenFlag);";
    775 ForceRest(1) -> Void [Object]
        "void ForceRest(object oCreature);";
    776 SetCameraHeight(1) -> Void [Object, Float]
        "void SetCameraHeight(object oPlayer, float fHeight=0.0f);";
    777 SetSkyBox(1) -> Void [Int, Object]
        "void SetSkyBox(int nSkyBox, object oArea=OBJECT_INVALID);";
    778 GetPhenoType(1) -> Int [Object]
        "int GetPhenoType(object oCreature);";
    779 SetPhenoType(1) -> Void [Int, Object]
        "void SetPhenoType(int nPhenoType, object oCreature=OBJECT_SELF);";
    780 SetFogColor(2) -> Void [Int, Int, Object]
        "void SetFogColor(int nFogType, int nFogColor, object oArea=OBJECT_INVALID);";
    781 GetCutsceneMode(0) -> Int [Object]
        "int GetCutsceneMode(object oCreature=OBJECT_SELF);";
    782 GetSkyBox(0) -> Int [Object]
        "int GetSkyBox(object oArea=OBJECT_INVALID);";
    783 GetFogColor(1) -> Int [Int, Object]
        "int GetFogColor(int nFogType, object oArea=OBJECT_INVALID);";
    784 SetFogAmount(2) -> Void [Int, Int, Object]
        "void SetFogAmount(int nFogType, int nFogAmount, object oArea=OBJECT_INVALID);";
    785 GetFogAmount(1) -> Int [Int, Object]
        "int GetFogAmount(int nFogType, object oArea=OBJECT_INVALID);";
    786 GetPickpocketableFlag(1) -> Int [Object]
        "int GetPickpocketableFlag(object oItem);";
    787 SetPickpocketableFlag(2) -> Void [Object, Int]
        "void SetPickpocketableFlag(object oItem, int bPickpocketable);";
    788 GetFootstepType(0) -> Int [Object]
        "int GetFootstepType(object oCreature=OBJECT_SELF);";
    789 SetFootstepType(1) -> Void [Int, Object]
        "void SetFootstepType(int nFootstepType, object oCreature=OBJECT_SELF);";
    790 GetCreatureWingType(0) -> Int [Object]
        "int GetCreatureWingType(object oCreature=OBJECT_SELF);";
    791 SetCreatureWingType(1) -> Void [Int, Object]
        "void SetCreatureWingType(int nWingType, object oCreature=OBJECT_SELF);";
    792 GetCreatureBodyPart(1) -> Int [Int, Object]
        "int GetCreatureBodyPart(int nPart, object oCreature=OBJECT_SELF);";
    793 SetCreatureBodyPart(2) -> Void [Int, Int, Object]
        "void SetCreatureBodyPart(int nPart, int nModelNumber, object oCreature=OBJECT_SELF);";
    794 GetCreatureTailType(0) -> Int [Object]
        "int GetCreatureTailType(object oCreature=OBJECT_SELF);";
    795 SetCreatureTailType(1) -> Void [Int, Object]
        "void SetCreatureTailType(int nTailType, object oCreature=OBJECT_SELF);";
    796 GetHardness(0) -> Int [Object]
        "int GetHardness(object oObject=OBJECT_SELF);";
    797 SetHardness(1) -> Void [Int, Object]
        "void SetHardness(int nHardness, object oObject=OBJECT_SELF);";
    798 SetLockKeyRequired(1) -> Void [Object, Int]
        "void SetLockKeyRequired(object oObject, int nKeyRequired=TRUE);";
    799 SetLockKeyTag(2) -> Void [Object, String]
        "void SetLockKeyTag(object oObject, string sNewKeyTag);";
    800 SetLockLockable(1) -> Void [Object, Int]
        "void SetLockLockable(object oObject, int nLockable=TRUE);";
    801 SetLockUnlockDC(2) -> Void [Object, Int]
        "void SetLockUnlockDC(object oObject, int nNewUnlockDC);";
    802 SetLockLockDC(2) -> Void [Object, Int]
        "void SetLockLockDC(object oObject, int nNewLockDC);";
    803 SetTrapDisarmable(1) -> Void [Object, Int]
        "void SetTrapDisarmable(object oTrapObject, int nDisarmable=TRUE);";
    804 SetTrapDetectable(1) -> Void [Object, Int]
        "void SetTrapDetectable(object oTrapObject, int nDetectable=TRUE);";
    805 SetTrapOneShot(1) -> Void [Object, Int]
        "void SetTrapOneShot(object oTrapObject, int nOneShot=TRUE);";
    806 SetTrapKeyTag(2) -> Void [Object, String]
        "void SetTrapKeyTag(object oTrapObject, string sKeyTag);";
    807 SetTrapDisarmDC(2) -> Void [Object, Int]
        "void SetTrapDisarmDC(object oTrapObject, int nDisarmDC);";
    808 SetTrapDetectDC(2) -> Void [Object, Int]
        "void SetTrapDetectDC(object oTrapObject, int nDetectDC);";
    809 CreateTrapAtLocation(2) -> Object [Int, Location, Float, String, Int, String, String]
        r#"object CreateTrapAtLocation(int nTrapType, location lLocation, float fSize=2.0f, string sTag="", int nFaction=STANDARD_FACTION_HOSTILE, string sOnDisarmScript="", string sOnTrapTriggeredScript="");"#;
    810 CreateTrapOnObject(2) -> Void [Int, Object, Int, String, String]
        r#"void CreateTrapOnObject(int nTrapType, object oObject, int nFaction=STANDARD_FACTION_HOSTILE, string sOnDisarmScript="", string sOnTrapTriggeredScript="");"#;
    811 SetWillSavingThrow(2) -> Void [Object, Int]
        "void SetWillSavingThrow(object oObject, int nWillSave);";
    812 SetReflexSavingThrow(2) -> Void [Object, Int]
        "void SetReflexSavingThrow(object oObject, int nReflexSave);";
    813 SetFortitudeSavingThrow(2) -> Void [Object, Int]
        "void SetFortitudeSavingThrow(object oObject, int nFortitudeSave);";
    814 GetTilesetResRef(1) -> String [Object]
        "string GetTilesetResRef(object oArea);";
    815 GetTrapRecoverable(1) -> Int [Object]
        "int GetTrapRecoverable(object oTrapObject);";
    816 SetTrapRecoverable(1) -> Void [Object, Int]
        "void SetTrapRecoverable(object oTrapObject, int nRecoverable=TRUE);";
    817 GetModuleXPScale(0) -> Int []
        "int GetModuleXPScale();";
    818 SetModuleXPScale(1) -> Void [Int]
        "void SetModuleXPScale(int nXPScale);";
    819 GetKeyRequiredFeedback(1) -> String [Object]
        "string GetKeyRequiredFeedback(object oObject);";
    820 SetKeyRequiredFeedback(2) -> Void [Object, String]
        "void SetKeyRequiredFeedback(object oObject, string sFeedbackMessage);";
    821 GetTrapActive(1) -> Int [Object]
        "int GetTrapActive(object oTrapObject);";
    822 SetTrapActive(1) -> Void [Object, Int]
        "void SetTrapActive(object oTrapObject, int nActive=TRUE);";
    823 LockCameraPitch(1) -> Void [Object, Int]
        "void LockCameraPitch(object oPlayer, int bLocked=TRUE);";
    824 LockCameraDistance(1) -> Void [Object, Int]
        "void LockCameraDistance(object oPlayer, int bLocked=TRUE);";
    825 LockCameraDirection(1) -> Void [Object, Int]
        "void LockCameraDirection(object oPlayer, int bLocked=TRUE);";
    826 GetPlaceableLastClickedBy(0) -> Object []
        "object GetPlaceableLastClickedBy();";
    827 GetInfiniteFlag(1) -> Int [Object]
        "int GetInfiniteFlag(object oItem);";
    828 SetInfiniteFlag(1) -> Void [Object, Int]
        "void SetInfiniteFlag(object oItem, int bInfinite=TRUE);";
    829 GetAreaSize(1) -> Int [Int, Object]
        "int GetAreaSize(int nAreaDimension, object oArea=OBJECT_INVALID);";
    830 SetName(1) -> Void [Object, String]
        r#"void SetName(object oObject, string sNewName="");"#;
    831 GetPortraitId(0) -> Int [Object]
        "int GetPortraitId(object oTarget=OBJECT_SELF);";
    832 SetPortraitId(2) -> Void [Object, Int]
        "void SetPortraitId(object oTarget, int nPortraitId);";
    833 GetPortraitResRef(0) -> String [Object]
        "string GetPortraitResRef(object oTarget=OBJECT_SELF);";
    834 SetPortraitResRef(2) -> Void [Object, String]
        "void SetPortraitResRef(object oTarget, string sPortraitResRef);";
    835 SetUseableFlag(2) -> Void [Object, Int]
        "void SetUseableFlag(object oPlaceable, int nUseableFlag);";
    836 GetDescription(1) -> String [Object, Int, Int]
        "string GetDescription(object oObject, int bOriginalDescription=FALSE, int bIdentifiedDescription=TRUE);";
    837 SetDescription(1) -> Void [Object, String, Int]
        r#"void SetDescription(object oObject, string sNewDescription="", int bIdentifiedDescription=TRUE);"#;
    838 GetPCChatSpeaker(0) -> Object []
        "object GetPCChatSpeaker();";
    839 GetPCChatMessage(0) -> String []
        "string GetPCChatMessage();";
    840 GetPCChatVolume(0) -> Int []
        "int GetPCChatVolume();";
    841 SetPCChatMessage(0) -> Void [String]
        r#"void SetPCChatMessage(string sNewChatMessage="");"#;
    842 SetPCChatVolume(0) -> Void [Int]
        "void SetPCChatVolume(int nTalkVolume=TALKVOLUME_TALK);";
    843 GetColor(2) -> Int [Object, Int]
        "int GetColor(object oObject, int nColorChannel);";
    844 SetColor(3) -> Void [Object, Int, Int]
        "void SetColor(object oObject, int nColorChannel, int nColorValue);";
    845 ItemPropertyMaterial(1) -> ItemProperty [Int]
        "itemproperty ItemPropertyMaterial(int nMaterialType);";
    846 ItemPropertyQuality(1) -> ItemProperty [Int]
        "itemproperty ItemPropertyQuality(int nQuality);";
    847 ItemPropertyAdditional(1) -> ItemProperty [Int]
        "itemproperty ItemPropertyAdditional(int nAdditionalProperty);";
}
